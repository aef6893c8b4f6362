use super::*;

/// Tests listing composers when none exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_composers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComposerRepository::new(db);
    let composers = repo.get_all().await?;

    assert!(composers.is_empty());

    Ok(())
}

/// Tests that composers are listed in insertion order.
///
/// Expected: Ok(Vec) ordered by ID
#[tokio::test]
async fn returns_composers_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Composer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::composer::ComposerFactory::new(db)
        .first_name("Johann")
        .last_name("Bach")
        .build()
        .await?;
    let second = factory::composer::ComposerFactory::new(db)
        .first_name("Clara")
        .last_name("Schumann")
        .build()
        .await?;

    let repo = ComposerRepository::new(db);
    let composers = repo.get_all().await?;

    assert_eq!(composers.len(), 2);
    assert_eq!(composers[0].id, first.id);
    assert_eq!(composers[0].last_name, "Bach");
    assert_eq!(composers[1].id, second.id);
    assert_eq!(composers[1].first_name, "Clara");

    Ok(())
}
