use super::*;

/// Tests finding a team along with its roster.
///
/// Expected: Ok(Some(Team)) with players in stored order
#[tokio::test]
async fn finds_team_with_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .name("Giants")
        .player("Joe", "Smith", 50000.0)
        .player("Ann", "Lee", 62000.0)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let found = repo.find_by_id(team.id).await?.unwrap();

    assert_eq!(found.name, "Giants");
    assert_eq!(found.players.len(), 2);
    assert_eq!(found.players[0].first_name, "Joe");
    assert_eq!(found.players[1].salary, 62000.0);

    Ok(())
}

/// Tests finding a team that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
