//! Field-for-field conversions between the three shapes of each concept.
//!
//! Every pair is a plain `From` impl, so a field added to one shape and not
//! the others fails to compile instead of silently dropping data.

pub mod event;
pub mod sample;
pub mod tenant;
pub mod transaction;
