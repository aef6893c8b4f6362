use super::*;

/// Tests finding an existing composer.
///
/// Expected: Ok(Some(Composer))
#[tokio::test]
async fn finds_existing_composer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let composer = factory::create_composer(db).await?;

    let repo = ComposerRepository::new(db);
    let found = repo.find_by_id(composer.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.first_name, composer.first_name);
    assert_eq!(found.last_name, composer.last_name);

    Ok(())
}

/// Tests finding a composer that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
