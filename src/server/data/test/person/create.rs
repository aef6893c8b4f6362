use super::*;

/// Tests creating a person with roles and dependents.
///
/// Expected: Ok(Person) with embedded lists stored in order
#[tokio::test]
async fn creates_person_with_embedded_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .create(CreatePersonParam {
            first_name: "Marie".to_string(),
            last_name: "Curie".to_string(),
            birth_date: "1867-11-07".to_string(),
            roles: vec![
                Role {
                    text: "Physicist".to_string(),
                },
                Role {
                    text: "Chemist".to_string(),
                },
            ],
            dependents: vec![Dependent {
                first_name: "Irene".to_string(),
                last_name: "Curie".to_string(),
            }],
        })
        .await?;

    assert_eq!(person.roles.len(), 2);
    assert_eq!(person.roles[1].text, "Chemist");

    let stored = Person::find_by_id(person.id).one(db).await?.unwrap();
    assert_eq!(stored.birth_date, "1867-11-07");
    assert_eq!(stored.roles.0[0].text, "Physicist");
    assert_eq!(stored.dependents.0[0].first_name, "Irene");

    Ok(())
}

/// Tests creating a person without roles or dependents.
///
/// Expected: Ok(Person) with empty lists
#[tokio::test]
async fn creates_person_with_empty_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .create(CreatePersonParam {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            birth_date: "1912-06-23".to_string(),
            roles: Vec::new(),
            dependents: Vec::new(),
        })
        .await?;

    assert!(person.roles.is_empty());
    assert!(person.dependents.is_empty());

    Ok(())
}
