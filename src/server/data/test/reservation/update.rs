use super::*;

/// Tests rewriting a reservation's court and start while keeping its id.
///
/// Expected: Ok(Reservation) with the same id and new values, persisted
#[tokio::test]
async fn overwrites_slot_and_keeps_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court_1 = factory::create_court(db).await?;
    let court_2 = factory::create_court(db).await?;
    let existing = factory::create_reservation(db, &client.phone_number, court_1.id, at(10, 0)).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            ReservationSlotParams {
                client_phone: client.phone_number.clone(),
                court_id: court_2.id,
                start_time: at(16, 0),
            },
        )
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.court_id, court_2.id);
    assert_eq!(updated.start_time, at(16, 0));

    let stored = repo.find_by_id(existing.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests deleting a reservation reports whether a row was removed.
///
/// Expected: Ok(true) the first time, Ok(false) afterwards
#[tokio::test]
async fn delete_reports_removed_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court = factory::create_court(db).await?;
    let existing = factory::create_reservation(db, &client.phone_number, court.id, at(10, 0)).await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.delete(existing.id).await?);
    assert!(!repo.delete(existing.id).await?);
    assert!(repo.find_by_id(existing.id).await?.is_none());

    Ok(())
}
