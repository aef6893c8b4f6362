use super::*;

/// Tests finding a user by name.
///
/// Expected: Ok(Some(User)) including the stored hash
#[tokio::test]
async fn finds_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("bob")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_user_name("bob").await?.unwrap();

    assert_eq!(found.user_name, "bob");
    assert_eq!(found.password_hash, "stored-hash");

    Ok(())
}

/// Tests that lookups are exact matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_user_name("nobody").await?.is_none());

    Ok(())
}
