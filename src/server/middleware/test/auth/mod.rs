use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{authorize, AuthGuard, Permission},
        session::AuthSession,
    },
    model::{
        auth::Caller,
        client::Client,
        user::{Role, User},
    },
};
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod permission;
mod require;

fn user_caller(id: i32, role: Role) -> Caller {
    Caller::User(User {
        id,
        first_name: "Test".to_string(),
        last_name: format!("User{}", id),
        password_hash: String::new(),
        role,
    })
}

fn client_caller(phone_number: &str) -> Caller {
    Caller::Client(Client {
        phone_number: phone_number.to_string(),
        first_name: "Test".to_string(),
        last_name: "Client".to_string(),
        password_hash: String::new(),
    })
}
