use super::*;

/// Tests finding a customer by user name.
///
/// Expected: Ok(Some(Customer))
#[tokio::test]
async fn finds_customer_by_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;
    let target = factory::customer::CustomerFactory::new(db)
        .user_name("grace")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let found = repo.find_by_user_name("grace").await?;

    assert_eq!(found.map(|c| c.id), Some(target.id));

    Ok(())
}

/// Tests that the oldest customer wins when user names collide.
///
/// Expected: Ok(Some(Customer)) with the lowest ID
#[tokio::test]
async fn returns_oldest_match_for_shared_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::customer::CustomerFactory::new(db)
        .user_name("shared")
        .first_name("First")
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .user_name("shared")
        .first_name("Second")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let found = repo.find_by_user_name("shared").await?.unwrap();

    assert_eq!(found.id, first.id);
    assert_eq!(found.first_name, "First");

    Ok(())
}

/// Tests looking up an unknown user name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let found = repo.find_by_user_name("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
