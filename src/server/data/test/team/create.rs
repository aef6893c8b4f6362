use super::*;

/// Tests creating a team.
///
/// Expected: Ok(Team) with an empty roster
#[tokio::test]
async fn creates_team_with_empty_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParam {
            name: "Giants".to_string(),
            mascot: "Gary".to_string(),
        })
        .await?;

    assert_eq!(team.name, "Giants");
    assert_eq!(team.mascot, "Gary");
    assert!(team.players.is_empty());

    let stored = Team::find_by_id(team.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
