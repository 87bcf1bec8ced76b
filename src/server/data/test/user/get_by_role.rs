use super::*;

/// Tests listing users of one role ordered by last then first name.
///
/// Expected: Ok(vec) with only coaches, ordered by name
#[tokio::test]
async fn lists_role_members_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .first_name("Zed")
        .last_name("Baker")
        .role("coach")
        .build()
        .await?;
    UserFactory::new(db)
        .first_name("Amy")
        .last_name("Baker")
        .role("coach")
        .build()
        .await?;
    UserFactory::new(db)
        .first_name("Bob")
        .last_name("Adams")
        .role("coach")
        .build()
        .await?;
    factory::create_player(db).await?;

    let coaches = UserRepository::new(db).get_by_role(Role::Coach).await?;

    let names: Vec<_> = coaches.iter().map(|c| c.full_name()).collect();
    assert_eq!(names, vec!["Bob Adams", "Amy Baker", "Zed Baker"]);
    assert!(coaches.iter().all(|c| c.role == Role::Coach));

    Ok(())
}

/// Tests that a stored role outside the known set is reported as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_stored_role_is_internal_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role("janitor").build().await?;

    let row = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    let result = User::from_entity(row);

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
