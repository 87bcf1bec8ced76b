use sea_orm::DatabaseConnection;

use crate::server::{
    data::client::ClientRepository,
    error::{auth::AuthError, AppError},
    model::client::{Client, CreateClientParams, RegisterClientParams, UpdateClientParams},
    service::password::{hash_password, verify_password},
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a booking client keyed by phone number.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Missing field
    /// - `Err(AppError::Conflict)` - The phone number is already registered
    pub async fn register(&self, params: RegisterClientParams) -> Result<Client, AppError> {
        if params.phone_number.is_empty()
            || params.first_name.is_empty()
            || params.last_name.is_empty()
            || params.password.is_empty()
        {
            return Err(AppError::BadRequest(
                "Phone number, first name, last name and password are required".to_string(),
            ));
        }

        let repo = ClientRepository::new(self.db);
        let phone_taken = format!("Phone number {} is already registered", params.phone_number);

        if repo.find_by_phone(&params.phone_number).await?.is_some() {
            return Err(AppError::Conflict(phone_taken));
        }

        let password_hash = hash_password(&params.password)?;

        let client = repo
            .create(CreateClientParams {
                phone_number: params.phone_number,
                first_name: params.first_name,
                last_name: params.last_name,
                password_hash,
            })
            .await
            .map_err(|e| AppError::from_unique_violation(e, phone_taken))?;

        tracing::info!("Registered client {}", client.phone_number);

        Ok(client)
    }

    /// Checks a client's phone number and password.
    pub async fn login(&self, phone_number: &str, password: &str) -> Result<Client, AppError> {
        let Some(client) = ClientRepository::new(self.db)
            .find_by_phone(phone_number.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &client.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(client)
    }

    pub async fn get(&self, phone_number: &str) -> Result<Client, AppError> {
        ClientRepository::new(self.db)
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| client_not_found(phone_number))
    }

    /// Updates a client's names.
    pub async fn update(&self, params: UpdateClientParams) -> Result<Client, AppError> {
        if params.first_name.is_empty() || params.last_name.is_empty() {
            return Err(AppError::BadRequest(
                "First name and last name are required".to_string(),
            ));
        }

        let repo = ClientRepository::new(self.db);
        if repo.find_by_phone(&params.phone_number).await?.is_none() {
            return Err(client_not_found(&params.phone_number));
        }

        Ok(repo.update(params).await?)
    }

    /// Removes a client together with their reservations.
    pub async fn delete(&self, phone_number: &str) -> Result<(), AppError> {
        if !ClientRepository::new(self.db).delete(phone_number).await? {
            return Err(client_not_found(phone_number));
        }

        tracing::info!("Removed client {}", phone_number);

        Ok(())
    }
}

fn client_not_found(phone_number: &str) -> AppError {
    AppError::NotFound(format!("Client {} not found", phone_number))
}
