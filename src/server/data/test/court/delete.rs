use super::*;

/// Tests deleting a court reports whether a row was removed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_court() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;

    let repo = CourtRepository::new(db);

    assert!(repo.delete(court.id).await?);
    assert!(!repo.delete(court.id).await?);
    assert!(repo.find_by_id(court.id).await?.is_none());

    Ok(())
}
