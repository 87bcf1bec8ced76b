use super::*;

/// Tests listing every reservation latest first.
///
/// Expected: Ok(vec) ordered 12:00, 10:00, 08:00
#[tokio::test]
async fn lists_all_latest_first() -> Result<(), DbErr> {
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
    factory::create_reservation(db, &client.phone_number, court_2.id, at(8, 0)).await?;
    factory::create_reservation(db, &client.phone_number, court_1.id, at(12, 0)).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.get_all(&ReservationFilter::All).await?;

    let starts: Vec<_> = result.iter().map(|r| r.start_time).collect();
    assert_eq!(starts, vec![at(12, 0), at(10, 0), at(8, 0)]);

    Ok(())
}

/// Tests listing one client's reservations.
///
/// Verifies that reservations of other clients are left out.
///
/// Expected: Ok(vec) with the client's two reservations, latest first
#[tokio::test]
async fn filters_by_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let other = factory::create_client(db).await?;
    let court = factory::create_court(db).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(8, 0)).await?;
    factory::create_reservation(db, &other.phone_number, court.id, at(10, 0)).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(14, 0)).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .get_all(&ReservationFilter::Client(client.phone_number.clone()))
        .await?;

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|r| r.client_phone == client.phone_number));
    assert_eq!(result[0].start_time, at(14, 0));

    Ok(())
}

/// Tests listing a court's reservations earliest first.
///
/// Expected: Ok(vec) ordered 09:00, 15:00
#[tokio::test]
async fn filters_by_court_earliest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court = factory::create_court(db).await?;
    let other_court = factory::create_court(db).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(15, 0)).await?;
    factory::create_reservation(db, &client.phone_number, other_court.id, at(12, 0)).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(9, 0)).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.get_all(&ReservationFilter::Court(court.id)).await?;

    let starts: Vec<_> = result.iter().map(|r| r.start_time).collect();
    assert_eq!(starts, vec![at(9, 0), at(15, 0)]);

    Ok(())
}
