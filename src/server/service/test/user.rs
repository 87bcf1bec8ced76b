use super::*;
use crate::server::{
    model::user::{RegisterUserParams, Role},
    service::user::UserService,
};

fn register_params(first_name: &str, last_name: &str, role: &str) -> RegisterUserParams {
    RegisterUserParams {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        password: "secret-password".to_string(),
        role: role.to_string(),
    }
}

/// Tests registering a user and logging in with their password.
///
/// Expected: Ok(User) from login, InvalidCredentials for a wrong password
#[tokio::test]
async fn registers_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register(register_params("Serena", "Williams", "coach"))
        .await?;

    assert_eq!(user.role, Role::Coach);
    assert_ne!(user.password_hash, "secret-password");

    let logged_in = service
        .login("Serena", "Williams", "secret-password")
        .await?;
    assert_eq!(logged_in.id, user.id);

    let wrong = service.login("Serena", "Williams", "guess").await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service.login("Nobody", "Here", "secret-password").await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that registration cannot create admins or unknown roles.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn rejects_unregistrable_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let admin = service.register(register_params("A", "Admin", "admin")).await;
    let unknown = service.register(register_params("U", "Umpire", "umpire")).await;

    assert!(matches!(admin, Err(AppError::BadRequest(_))));
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering a second user with the same full name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .register(register_params("Rafa", "Nadal", "player"))
        .await?;
    let result = service
        .register(register_params("Rafa", "Nadal", "coach"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating the startup admin directly.
#[tokio::test]
async fn creates_admin_with_explicit_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = UserService::new(db)
        .create_with_role(register_params("Club", "Admin", "admin"), Role::Admin)
        .await?;

    assert_eq!(admin.role, Role::Admin);

    Ok(())
}

/// Tests changing a password.
///
/// Expected: only the new password logs in afterwards
#[tokio::test]
async fn updates_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register(register_params("Andy", "Murray", "player"))
        .await?;

    service.update_password(user.id, "new-password").await?;

    assert!(service.login("Andy", "Murray", "secret-password").await.is_err());
    assert!(service.login("Andy", "Murray", "new-password").await.is_ok());

    assert!(matches!(
        service.update_password(999, "x").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests listing players and coaches separately, then deleting one.
#[tokio::test]
async fn lists_by_role_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::create_coach(db).await?;
    factory::create_admin(db).await?;

    let service = UserService::new(db);
    let players = service.list_by_role(Role::Player).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(service.list_by_role(Role::Coach).await?.len(), 1);

    service.delete(player.id).await?;

    assert!(service.list_by_role(Role::Player).await?.is_empty());
    assert!(matches!(
        service.delete(player.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
