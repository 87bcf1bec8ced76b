use crate::model::client::{ClientDto, RegisterClientDto};

/// A court-booking customer identified by phone number.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

impl Client {
    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            phone_number: self.phone_number,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }

    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            phone_number: entity.phone_number,
            first_name: entity.first_name,
            last_name: entity.last_name,
            password_hash: entity.password_hash,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterClientParams {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RegisterClientParams {
    pub fn from_dto(dto: RegisterClientDto) -> Self {
        Self {
            phone_number: dto.phone_number.trim().to_string(),
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClientParams {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct UpdateClientParams {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
}
