use crate::model::court::{CourtDto, CourtInputDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub id: i32,
    /// Unique display name.
    pub name: String,
    /// Surface or kind of court, e.g. `clay`.
    pub court_type: String,
}

impl Court {
    pub fn into_dto(self) -> CourtDto {
        CourtDto {
            id: self.id,
            name: self.name,
            court_type: self.court_type,
        }
    }

    pub fn from_entity(entity: entity::court::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            court_type: entity.court_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourtParams {
    pub name: String,
    pub court_type: String,
}

impl CreateCourtParams {
    pub fn from_dto(dto: CourtInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            court_type: dto.court_type.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCourtParams {
    pub id: i32,
    pub name: String,
    pub court_type: String,
}

impl UpdateCourtParams {
    pub fn from_dto(id: i32, dto: CourtInputDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            court_type: dto.court_type.trim().to_string(),
        }
    }
}
