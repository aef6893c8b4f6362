use super::*;

/// Tests creating a user.
///
/// Expected: Ok(User) with the hash stored and email addresses kept in order
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            user_name: "alice".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            email_address: vec!["a@example.com".to_string(), "b@example.com".to_string()],
        })
        .await?;

    assert_eq!(user.user_name, "alice");

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password, "$2b$10$hash");
    assert_eq!(
        stored.email_address.0,
        vec!["a@example.com".to_string(), "b@example.com".to_string()]
    );

    Ok(())
}

/// Tests that the unique index rejects a second user with the same name.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            user_name: "alice".to_string(),
            password_hash: "$2b$10$other".to_string(),
            email_address: Vec::new(),
        })
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
