use crate::domain::Sample;
use crate::dtos::SampleDto;
use crate::models::SampleModel;

impl From<SampleModel> for Sample {
    fn from(model: SampleModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<Sample> for SampleModel {
    fn from(entity: Sample) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

impl From<Sample> for SampleDto {
    fn from(entity: Sample) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

impl From<SampleDto> for Sample {
    fn from(dto: SampleDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
        }
    }
}
