use super::*;

/// Tests creating a user and finding them by full name.
///
/// Expected: Ok(Model) found by name, None for a different last name
#[tokio::test]
async fn creates_and_finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            first_name: "Ana".to_string(),
            last_name: "Ivanovic".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Coach,
        })
        .await?;

    assert_eq!(user.role, "coach");

    let found = repo.find_by_name("Ana", "Ivanovic").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_name("Ana", "Other").await?.is_none());

    Ok(())
}

/// Tests replacing a user's password hash.
///
/// Expected: Ok(Model) with the new hash stored
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_player(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password_hash(user.id, "new-hash".to_string())
        .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");
    assert_eq!(stored.first_name, user.first_name);

    Ok(())
}
