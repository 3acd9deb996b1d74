use crate::domain::Tenant;
use crate::dtos::TenantDto;
use crate::models::TenantModel;

impl From<TenantModel> for Tenant {
    fn from(model: TenantModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_email: model.contact_email,
        }
    }
}

impl From<Tenant> for TenantModel {
    fn from(entity: Tenant) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            contact_email: entity.contact_email,
        }
    }
}

impl From<Tenant> for TenantDto {
    fn from(entity: Tenant) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            contact_email: entity.contact_email,
        }
    }
}

impl From<TenantDto> for Tenant {
    fn from(dto: TenantDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            contact_email: dto.contact_email,
        }
    }
}
