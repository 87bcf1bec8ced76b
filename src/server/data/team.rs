use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    error::AppError,
    model::{
        team::{CreateTeamParams, Team},
        user::User,
    },
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            coach_id: ActiveValue::Set(params.coach_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(team))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(team.map(Team::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let teams = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Adds a player to a team.
    ///
    /// # Returns
    /// - `Err(DbErr)` - Unique violation when the player is already a member
    pub async fn add_member(&self, team_id: i32, player_id: i32) -> Result<(), DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            player_id: ActiveValue::Set(player_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_member(&self, team_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let member = entity::prelude::TeamMember::find_by_id((team_id, player_id))
            .one(self.db)
            .await?;

        Ok(member.is_some())
    }

    pub async fn remove_member(&self, team_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamMember::delete_by_id((team_id, player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists the players of a team ordered by last then first name.
    pub async fn get_members(&self, team_id: i32) -> Result<Vec<User>, AppError> {
        let players = entity::prelude::User::find()
            .join(
                JoinType::InnerJoin,
                entity::team_member::Relation::Player.def().rev(),
            )
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        players.into_iter().map(User::from_entity).collect()
    }
}
