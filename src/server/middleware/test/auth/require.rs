use super::*;

/// Tests that a session without a login is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_empty_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests resolving a logged-in user.
///
/// Expected: Ok(Caller::User) with the stored user
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let caller = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(caller.user_id(), Some(admin.id));
    assert_eq!(caller.role(), Some(Role::Admin));

    Ok(())
}

/// Tests a user lacking the required role.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_wrong_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let player = factory::create_player(db).await?;
    AuthSession::new(session).set_user_id(player.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(subject, message))) => {
            assert_eq!(subject, format!("user {}", player.id));
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests resolving a logged-in client and checking their own phone number.
///
/// Expected: Ok(Caller::Client)
#[tokio::test]
async fn resolves_logged_in_client() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_client(db).await?;
    AuthSession::new(session)
        .set_client_phone(client.phone_number.clone())
        .await?;

    let caller = AuthGuard::new(db, session)
        .require(&[Permission::ClientOrStaff(client.phone_number.clone())])
        .await?;

    assert_eq!(caller.client_phone(), Some(client.phone_number.as_str()));
    assert_eq!(caller.role(), None);

    Ok(())
}

/// Tests that logging in as a user replaces an earlier client login.
///
/// Expected: Ok(Caller::User)
#[tokio::test]
async fn user_login_replaces_client_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_client(db).await?;
    let manager = UserFactory::new(db).role("booking_manager").build().await?;

    let auth_session = AuthSession::new(session);
    auth_session
        .set_client_phone(client.phone_number.clone())
        .await?;
    auth_session.set_user_id(manager.id).await?;

    assert_eq!(auth_session.get_client_phone().await?, None);

    let caller = AuthGuard::new(db, session).require(&[]).await?;
    assert_eq!(caller.user_id(), Some(manager.id));

    Ok(())
}

/// Tests a session pointing at a deleted user.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that clearing the session logs the caller out.
#[tokio::test]
async fn clear_logs_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let coach = factory::create_coach(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(coach.id).await?;
    assert!(auth_session.is_authenticated().await?);

    auth_session.clear().await;

    assert!(!auth_session.is_authenticated().await?);
    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(result.is_err());

    Ok(())
}
