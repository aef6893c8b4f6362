use super::*;

/// Tests updating both name fields.
///
/// Expected: Ok(Some(Composer)) with new values persisted
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let composer = factory::create_composer(db).await?;

    let repo = ComposerRepository::new(db);
    let updated = repo
        .update(
            composer.id,
            UpdateComposerParam {
                first_name: Some("Wolfgang".to_string()),
                last_name: Some("Mozart".to_string()),
            },
        )
        .await?;

    assert!(updated.is_some());

    let stored = Composer::find_by_id(composer.id).one(db).await?.unwrap();
    assert_eq!(stored.first_name, "Wolfgang");
    assert_eq!(stored.last_name, "Mozart");

    Ok(())
}

/// Tests that omitted fields keep their stored value.
///
/// Expected: Ok(Some(Composer)) with only the provided field changed
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let composer = factory::composer::ComposerFactory::new(db)
        .first_name("Franz")
        .last_name("Schubert")
        .build()
        .await?;

    let repo = ComposerRepository::new(db);
    repo.update(
        composer.id,
        UpdateComposerParam {
            first_name: None,
            last_name: Some("Liszt".to_string()),
        },
    )
    .await?;

    let stored = Composer::find_by_id(composer.id).one(db).await?.unwrap();
    assert_eq!(stored.first_name, "Franz");
    assert_eq!(stored.last_name, "Liszt");

    Ok(())
}

/// Tests updating a composer that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let updated = repo
        .update(
            999,
            UpdateComposerParam {
                first_name: Some("Nobody".to_string()),
                last_name: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
