//! The authenticated identity behind a request.

use crate::{
    model::user::CallerDto,
    server::model::{
        client::Client,
        user::{Role, User},
    },
};

/// The party making a request: a club account or a booking client.
#[derive(Debug, Clone, PartialEq)]
pub enum Caller {
    User(User),
    Client(Client),
}

impl Caller {
    /// Role of a user caller; clients have no role.
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::User(user) => Some(user.role),
            Self::Client(_) => None,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::User(user) => Some(user.id),
            Self::Client(_) => None,
        }
    }

    pub fn client_phone(&self) -> Option<&str> {
        match self {
            Self::User(_) => None,
            Self::Client(client) => Some(&client.phone_number),
        }
    }

    /// Short identifier used in logs and access-denied errors.
    pub fn subject(&self) -> String {
        match self {
            Self::User(user) => format!("user {}", user.id),
            Self::Client(client) => format!("client {}", client.phone_number),
        }
    }

    pub fn into_dto(self) -> CallerDto {
        match self {
            Self::User(user) => CallerDto::User(user.into_dto()),
            Self::Client(client) => CallerDto::Client(client.into_dto()),
        }
    }
}
