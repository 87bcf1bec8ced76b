use super::*;

/// Tests creating a court and finding it by name.
///
/// Expected: Ok(Court) retrievable by id and by name
#[tokio::test]
async fn creates_court() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourtRepository::new(db);
    let court = repo
        .create(CreateCourtParams {
            name: "Centre Court".to_string(),
            court_type: "grass".to_string(),
        })
        .await?;

    assert!(court.id > 0);
    assert_eq!(repo.find_by_id(court.id).await?, Some(court.clone()));
    assert_eq!(repo.find_by_name("Centre Court").await?, Some(court));
    assert!(repo.find_by_name("Court 99").await?.is_none());

    Ok(())
}

/// Tests that the name column is unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::court::CourtFactory::new(db)
        .name("Court 1")
        .build()
        .await?;

    let repo = CourtRepository::new(db);
    let result = repo
        .create(CreateCourtParams {
            name: "Court 1".to_string(),
            court_type: "hard".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests updating a court's name and type.
///
/// Expected: Ok(Court) with new values and the same id
#[tokio::test]
async fn updates_court() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;

    let repo = CourtRepository::new(db);
    let updated = repo
        .update(UpdateCourtParams {
            id: court.id,
            name: "Renamed".to_string(),
            court_type: "hard".to_string(),
        })
        .await?;

    assert_eq!(updated.id, court.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.court_type, "hard");

    Ok(())
}
