use super::*;

/// Tests that only an exact start on the same date counts as booked.
///
/// Verifies the coach is booked at 09:00, but free at 09:30 (inside the 09:00 lesson),
/// at 09:00 on another date, and for another coach.
///
/// Expected: Ok(true) only for the exact slot
#[tokio::test]
async fn matches_exact_coach_date_and_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let coach = factory::create_coach(db).await?;
    let other_coach = factory::create_coach(db).await?;
    factory::create_lesson(db, player.id, coach.id).await?;

    let repo = LessonRepository::new(db);
    let next_day = test_date().succ_opt().unwrap();

    assert!(repo.is_booked(coach.id, test_date(), time(9, 0)).await?);
    assert!(!repo.is_booked(coach.id, test_date(), time(9, 30)).await?);
    assert!(!repo.is_booked(coach.id, next_day, time(9, 0)).await?);
    assert!(!repo.is_booked(other_coach.id, test_date(), time(9, 0)).await?);

    Ok(())
}
