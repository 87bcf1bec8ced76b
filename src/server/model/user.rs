//! User domain models and parameters.
//!
//! Users are the club's accounts with a role: players, coaches, administrators and
//! booking managers (an administrator sub-role limited to bookings).

use crate::{
    model::user::{RegisterUserDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Coach,
    Admin,
    BookingManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Coach => "coach",
            Self::Admin => "admin",
            Self::BookingManager => "booking_manager",
        }
    }

    /// Parses stored or submitted role text.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "player" => Some(Self::Player),
            "coach" => Some(Self::Coach),
            "admin" => Some(Self::Admin),
            "booking_manager" => Some(Self::BookingManager),
            _ => None,
        }
    }

    /// Roles an administrator may assign through registration.
    pub fn is_registrable(&self) -> bool {
        !matches!(self, Self::Admin)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - The stored role is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| InternalError::UnknownRole {
            user_id: entity.id,
            role: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            password_hash: entity.password_hash,
            role,
        })
    }
}

/// Registration request with a plaintext password and unvalidated role.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            password: dto.password,
            role: dto.role.trim().to_lowercase(),
        }
    }
}

/// Row written by the repository once the password is hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: Role,
}
