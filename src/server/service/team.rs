use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, user::UserRepository},
    error::AppError,
    model::{
        team::{CreateTeamParams, Team},
        user::{Role, User},
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team led by an existing coach.
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Team name is required".to_string()));
        }

        self.require_role(params.coach_id, Role::Coach).await?;

        let team = TeamRepository::new(self.db).create(params).await?;

        tracing::info!("Created team {} ({})", team.name, team.id);

        Ok(team)
    }

    pub async fn get(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    /// Assigns a player to a team.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Team or player does not exist
    /// - `Err(AppError::Conflict)` - Player is already on the team
    pub async fn assign_player(&self, team_id: i32, player_id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        self.get(team_id).await?;
        self.require_role(player_id, Role::Player).await?;

        let already_assigned = format!(
            "Player {} is already assigned to team {}",
            player_id, team_id
        );
        if repo.is_member(team_id, player_id).await? {
            return Err(AppError::Conflict(already_assigned));
        }

        repo.add_member(team_id, player_id)
            .await
            .map_err(|e| AppError::from_unique_violation(e, already_assigned))?;

        Ok(())
    }

    pub async fn list_players(&self, team_id: i32) -> Result<Vec<User>, AppError> {
        self.get(team_id).await?;

        TeamRepository::new(self.db).get_members(team_id).await
    }

    pub async fn remove_player(&self, team_id: i32, player_id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db)
            .remove_member(team_id, player_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Player {} is not on team {}",
                player_id, team_id
            )));
        }

        Ok(())
    }

    async fn require_role(&self, user_id: i32, role: Role) -> Result<(), AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        match user {
            Some(user) if user.role == role.as_str() => Ok(()),
            _ => Err(AppError::NotFound(format!(
                "No {} with id {}",
                role.as_str(),
                user_id
            ))),
        }
    }
}

fn team_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Team {} not found", id))
}
