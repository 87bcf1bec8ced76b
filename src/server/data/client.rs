use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::client::{Client, CreateClientParams, UpdateClientParams};

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateClientParams) -> Result<Client, DbErr> {
        let client = entity::client::ActiveModel {
            phone_number: ActiveValue::Set(params.phone_number),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            password_hash: ActiveValue::Set(params.password_hash),
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(client))
    }

    pub async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Client>, DbErr> {
        let client = entity::prelude::Client::find_by_id(phone_number.to_string())
            .one(self.db)
            .await?;

        Ok(client.map(Client::from_entity))
    }

    /// Updates a client's names, leaving the phone number and password untouched.
    pub async fn update(&self, params: UpdateClientParams) -> Result<Client, DbErr> {
        let client = entity::client::ActiveModel {
            phone_number: ActiveValue::Unchanged(params.phone_number),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            password_hash: ActiveValue::NotSet,
        }
        .update(self.db)
        .await?;

        Ok(Client::from_entity(client))
    }

    /// Deletes a client. Their reservations are removed by the cascading foreign key.
    pub async fn delete(&self, phone_number: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(phone_number.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
