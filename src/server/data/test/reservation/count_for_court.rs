use super::*;

#[tokio::test]
async fn counts_only_that_court() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court = factory::create_court(db).await?;
    let empty_court = factory::create_court(db).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(8, 0)).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(9, 0)).await?;

    let repo = ReservationRepository::new(db);

    assert_eq!(repo.count_for_court(court.id).await?, 2);
    assert_eq!(repo.count_for_court(empty_court.id).await?, 0);

    Ok(())
}
