use super::*;

/// Tests that a reservation starting inside the window overlaps.
///
/// Verifies that an existing 10:00 slot is returned when checking 10:30-11:30.
///
/// Expected: Ok(vec) with the 10:00 reservation
#[tokio::test]
async fn finds_reservation_starting_before_window() -> Result<(), DbErr> {
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
    let result = repo
        .find_overlapping(court.id, at(10, 30), at(11, 30), None)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, existing.id);

    Ok(())
}

/// Tests that windows touching at a boundary do not overlap.
///
/// Verifies that reservations at 09:00 and 11:00 are not returned for 10:00-11:00,
/// since slots are half-open.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn adjacent_slots_do_not_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court = factory::create_court(db).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(9, 0)).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(11, 0)).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .find_overlapping(court.id, at(10, 0), at(10, 0) + slot_length(), None)
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that only the requested court is checked.
///
/// Expected: Ok(empty vec) for a second court with nothing booked
#[tokio::test]
async fn ignores_other_courts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court_1 = factory::create_court(db).await?;
    let court_2 = factory::create_court(db).await?;
    factory::create_reservation(db, &client.phone_number, court_1.id, at(10, 0)).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .find_overlapping(court_2.id, at(10, 0), at(11, 0), None)
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests excluding the reservation being moved.
///
/// Verifies that a reservation does not conflict with itself, while another overlapping
/// reservation on the same court is still reported.
///
/// Expected: Ok(vec) containing only the other reservation
#[tokio::test]
async fn excludes_given_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court = factory::create_court(db).await?;
    let own = factory::create_reservation(db, &client.phone_number, court.id, at(10, 0)).await?;
    let other = factory::create_reservation(db, &client.phone_number, court.id, at(11, 0)).await?;

    let repo = ReservationRepository::new(db);

    let unchanged = repo
        .find_overlapping(court.id, at(10, 0), at(11, 0), Some(own.id))
        .await?;
    assert!(unchanged.is_empty());

    let moved = repo
        .find_overlapping(court.id, at(10, 30), at(11, 30), Some(own.id))
        .await?;
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].id, other.id);

    Ok(())
}
