use super::*;

/// Tests deleting an existing composer.
///
/// Verifies the removed composer is returned and no longer stored.
///
/// Expected: Ok(Some(Composer))
#[tokio::test]
async fn deletes_composer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let composer = factory::create_composer(db).await?;
    let other = factory::create_composer(db).await?;

    let repo = ComposerRepository::new(db);
    let deleted = repo.delete(composer.id).await?;

    assert_eq!(deleted.map(|c| c.id), Some(composer.id));
    assert!(Composer::find_by_id(composer.id).one(db).await?.is_none());
    assert!(Composer::find_by_id(other.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a composer that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(deleted.is_none());

    Ok(())
}
