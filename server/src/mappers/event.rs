use crate::domain::Event;
use crate::dtos::EventDto;
use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            event_type: model.event_type,
            location: model.location,
            starts_at: model.starts_at,
        }
    }
}

impl From<Event> for EventModel {
    fn from(entity: Event) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            event_type: entity.event_type,
            location: entity.location,
            starts_at: entity.starts_at,
        }
    }
}

impl From<Event> for EventDto {
    fn from(entity: Event) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            event_type: entity.event_type,
            location: entity.location,
            starts_at: entity.starts_at,
        }
    }
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            event_type: dto.event_type,
            location: dto.location,
            starts_at: dto.starts_at,
        }
    }
}
