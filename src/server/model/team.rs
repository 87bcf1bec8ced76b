use crate::model::team::{CreateTeamDto, TeamDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub coach_id: i32,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            coach_id: self.coach_id,
        }
    }

    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            coach_id: entity.coach_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub coach_id: i32,
}

impl CreateTeamParams {
    pub fn from_dto(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            coach_id: dto.coach_id,
        }
    }
}
