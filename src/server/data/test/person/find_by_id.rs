use super::*;

/// Tests finding an existing person.
///
/// Expected: Ok(Some(Person))
#[tokio::test]
async fn finds_existing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .first_name("Rosalind")
        .role("Chemist")
        .dependent("Jane", "Doe")
        .build()
        .await?;

    let repo = PersonRepository::new(db);
    let found = repo.find_by_id(person.id).await?.unwrap();

    assert_eq!(found.first_name, "Rosalind");
    assert_eq!(found.roles[0].text, "Chemist");
    assert_eq!(found.dependents[0].last_name, "Doe");

    Ok(())
}

/// Tests finding a person that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
