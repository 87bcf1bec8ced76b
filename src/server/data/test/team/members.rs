use super::*;

/// Tests adding, checking and removing team members.
///
/// Expected: membership reported after add, duplicate add rejected, gone after remove
#[tokio::test]
async fn adds_and_removes_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "Juniors".to_string(),
            coach_id: coach.id,
        })
        .await?;

    assert!(!repo.is_member(team.id, player.id).await?);

    repo.add_member(team.id, player.id).await?;
    assert!(repo.is_member(team.id, player.id).await?);

    let duplicate = repo.add_member(team.id, player.id).await;
    assert!(duplicate.is_err());

    assert!(repo.remove_member(team.id, player.id).await?);
    assert!(!repo.remove_member(team.id, player.id).await?);
    assert!(!repo.is_member(team.id, player.id).await?);

    Ok(())
}

/// Tests listing a team's players by name.
///
/// Verifies members of other teams are left out.
///
/// Expected: Ok(vec) with the team's two players ordered by last name
#[tokio::test]
async fn lists_members_of_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let team = factory::create_team(db, coach.id).await?;
    let other_team = factory::create_team(db, coach.id).await?;

    let second = UserFactory::new(db).last_name("Williams").build().await?;
    let first = UserFactory::new(db).last_name("Agassi").build().await?;
    let elsewhere = factory::create_player(db).await?;

    factory::add_team_member(db, team.id, second.id).await?;
    factory::add_team_member(db, team.id, first.id).await?;
    factory::add_team_member(db, other_team.id, elsewhere.id).await?;

    let members = TeamRepository::new(db).get_members(team.id).await?;

    let ids: Vec<_> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
