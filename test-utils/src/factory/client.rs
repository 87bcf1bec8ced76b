//! Client factory for creating court-booking customers.

use crate::factory::helpers::{next_id, UNUSABLE_PASSWORD_HASH};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients keyed by phone number.
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    phone_number: String,
    first_name: String,
    last_name: String,
    password_hash: String,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - phone_number: `"555{id:07}"`
    /// - first_name: `"Client{id}"`, last_name: `"Member"`
    /// - password_hash: unusable placeholder
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            phone_number: format!("555{:07}", id),
            first_name: format!("Client{}", id),
            last_name: "Member".to_string(),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
        }
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the client entity into the database.
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            phone_number: ActiveValue::Set(self.phone_number),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            password_hash: ActiveValue::Set(self.password_hash),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
