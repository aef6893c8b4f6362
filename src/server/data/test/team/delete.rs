use super::*;

/// Tests deleting a team.
///
/// Verifies the removed team is returned with its roster and is no longer stored.
///
/// Expected: Ok(Some(Team))
#[tokio::test]
async fn deletes_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .player("Joe", "Smith", 50000.0)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.delete(team.id).await?.unwrap();

    assert_eq!(deleted.id, team.id);
    assert_eq!(deleted.players.len(), 1);
    assert!(Team::find_by_id(team.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a team that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);

    assert!(repo.delete(999).await?.is_none());

    Ok(())
}
