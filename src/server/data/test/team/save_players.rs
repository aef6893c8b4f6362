use super::*;

/// Tests replacing the roster of a team.
///
/// Expected: Ok(Team) with the new roster persisted
#[tokio::test]
async fn saves_full_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .player("Joe", "Smith", 50000.0)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let mut players = repo.find_by_id(team.id).await?.unwrap().players;
    players.push(Player {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        salary: 62000.0,
    });

    let saved = repo.save_players(team.id, players).await?;
    assert_eq!(saved.players.len(), 2);

    let stored = Team::find_by_id(team.id).one(db).await?.unwrap();
    assert_eq!(stored.players.0.len(), 2);
    assert_eq!(stored.players.0[0].first_name, "Joe");
    assert_eq!(stored.players.0[1].last_name, "Lee");
    assert_eq!(stored.name, team.name);

    Ok(())
}

/// Tests saving a roster for a team that no longer exists.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo.save_players(999, Vec::new()).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
