use super::*;

/// Tests listing a coach's lessons by date then start.
///
/// Expected: Ok(vec) ordered by date, then by start on the same date
#[tokio::test]
async fn lists_by_date_then_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let coach = factory::create_coach(db).await?;
    let next_day = test_date().succ_opt().unwrap();

    LessonFactory::new(db, player.id, coach.id)
        .lesson_date(next_day)
        .times(time(8, 0), time(9, 0))
        .build()
        .await?;
    LessonFactory::new(db, player.id, coach.id)
        .times(time(14, 0), time(15, 0))
        .build()
        .await?;
    LessonFactory::new(db, player.id, coach.id)
        .times(time(9, 0), time(10, 0))
        .build()
        .await?;

    let lessons = LessonRepository::new(db).get_by_coach(coach.id).await?;

    let slots: Vec<_> = lessons.iter().map(|l| (l.lesson_date, l.start_time)).collect();
    assert_eq!(
        slots,
        vec![
            (test_date(), time(9, 0)),
            (test_date(), time(14, 0)),
            (next_day, time(8, 0)),
        ]
    );

    Ok(())
}

/// Tests listing a player's lessons leaves out other players.
///
/// Expected: Ok(vec) with only the player's lesson
#[tokio::test]
async fn lists_only_the_players_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lesson_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let other_player = factory::create_player(db).await?;
    let coach = factory::create_coach(db).await?;

    let lesson = factory::create_lesson(db, player.id, coach.id).await?;
    LessonFactory::new(db, other_player.id, coach.id)
        .times(time(11, 0), time(12, 0))
        .build()
        .await?;

    let lessons = LessonRepository::new(db).get_by_player(player.id).await?;

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].id, lesson.id);

    Ok(())
}
