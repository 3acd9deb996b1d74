//! Ticketing backend: transactions, events, tenants and samples over a
//! relational store.
//!
//! Requests flow handler → service → repository, with mappers translating
//! between the wire (`dtos`), business (`domain`) and storage (`models`)
//! shapes of each concept.

pub mod config;
pub mod domain;
pub mod dtos;
pub mod handlers;
pub mod mappers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
