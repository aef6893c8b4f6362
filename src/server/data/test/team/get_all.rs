use super::*;

#[tokio::test]
async fn returns_teams_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Team).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_team(db).await?;
    let second = factory::team::TeamFactory::new(db)
        .player("Joe", "Smith", 50000.0)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_all().await?;

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, first.id);
    assert!(teams[0].players.is_empty());
    assert_eq!(teams[1].id, second.id);
    assert_eq!(teams[1].players.len(), 1);

    Ok(())
}
