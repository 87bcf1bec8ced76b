//! Team and team membership factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating teams led by an existing coach.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    coach_id: i32,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory named `"Team {id}"`.
    pub fn new(db: &'a DatabaseConnection, coach_id: i32) -> Self {
        Self {
            db,
            name: format!("Team {}", next_id()),
            coach_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            coach_id: ActiveValue::Set(self.coach_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_team(
    db: &DatabaseConnection,
    coach_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, coach_id).build().await
}

/// Adds a player to a team.
pub async fn add_team_member(
    db: &DatabaseConnection,
    team_id: i32,
    player_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    entity::team_member::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        player_id: ActiveValue::Set(player_id),
    }
    .insert(db)
    .await
}
