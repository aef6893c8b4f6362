use super::*;

/// Tests creating a composer.
///
/// Verifies the returned composer carries a generated ID and that the row is stored.
///
/// Expected: Ok(Composer)
#[tokio::test]
async fn creates_composer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let composer = repo
        .create(CreateComposerParam {
            first_name: "Ludwig".to_string(),
            last_name: "Beethoven".to_string(),
        })
        .await?;

    assert_eq!(composer.first_name, "Ludwig");
    assert_eq!(composer.last_name, "Beethoven");

    let stored = Composer::find_by_id(composer.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().last_name, "Beethoven");

    Ok(())
}
