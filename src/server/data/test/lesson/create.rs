use super::*;

/// Tests storing a lesson.
///
/// Expected: Ok(Lesson) with a new id and the given slot
#[tokio::test]
async fn creates_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let coach = factory::create_coach(db).await?;

    let lesson = LessonRepository::new(db)
        .create(CreateLessonParams {
            player_id: player.id,
            coach_id: coach.id,
            lesson_date: test_date(),
            start_time: time(9, 0),
            end_time: time(10, 0),
        })
        .await?;

    assert!(lesson.id > 0);
    assert_eq!(lesson.player_id, player.id);
    assert_eq!(lesson.coach_id, coach.id);
    assert_eq!(lesson.start_time, time(9, 0));
    assert_eq!(lesson.end_time, time(10, 0));

    Ok(())
}
