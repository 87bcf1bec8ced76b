//! User account management and login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, Role, User},
    service::password::{hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a player, coach or booking manager.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Missing field or a role that cannot be registered
    /// - `Err(AppError::Conflict)` - A user with the same full name exists
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let role = Role::parse(&params.role)
            .filter(Role::is_registrable)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid role '{}', expected player, coach or booking_manager",
                    params.role
                ))
            })?;

        self.create_with_role(params, role).await
    }

    /// Creates a user with an explicit role, bypassing the registrable-role check.
    ///
    /// Used for the startup admin.
    pub async fn create_with_role(
        &self,
        params: RegisterUserParams,
        role: Role,
    ) -> Result<User, AppError> {
        if params.first_name.is_empty() || params.last_name.is_empty() || params.password.is_empty()
        {
            return Err(AppError::BadRequest(
                "First name, last name and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        let name_taken = format!(
            "A user named {} {} already exists",
            params.first_name, params.last_name
        );

        if repo
            .find_by_name(&params.first_name, &params.last_name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(name_taken));
        }

        let password_hash = hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                first_name: params.first_name,
                last_name: params.last_name,
                password_hash,
                role,
            })
            .await
            .map_err(|e| AppError::from_unique_violation(e, name_taken))?;

        let user = User::from_entity(user)?;
        tracing::info!("Registered {} {} (id {})", role.as_str(), user.full_name(), user.id);

        Ok(user)
    }

    /// Checks a user's name and password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown name or wrong password
    pub async fn login(
        &self,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_name(first_name.trim(), last_name.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        User::from_entity(user)
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        User::from_entity(user)
    }

    /// Lists users with the given role by last then first name.
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_by_role(role).await
    }

    /// Replaces a user's password.
    pub async fn update_password(&self, id: i32, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::BadRequest("Password is required".to_string()));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(user_not_found(id));
        }

        repo.update_password_hash(id, hash_password(password)?)
            .await?;

        tracing::info!("Updated password of user {}", id);

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found(id));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
