use super::*;

/// Tests listing courts ordered by name.
///
/// Expected: Ok(vec) ordered alphabetically
#[tokio::test]
async fn lists_courts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::court::CourtFactory::new(db).name("Court B").build().await?;
    factory::court::CourtFactory::new(db).name("Court A").build().await?;
    factory::court::CourtFactory::new(db).name("Court C").build().await?;

    let courts = CourtRepository::new(db).get_all().await?;

    let names: Vec<_> = courts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Court A", "Court B", "Court C"]);

    Ok(())
}
