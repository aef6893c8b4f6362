use super::*;

#[tokio::test]
async fn returns_all_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_person(db).await?;
    let second = factory::create_person(db).await?;

    let repo = PersonRepository::new(db);
    let people = repo.get_all().await?;

    let ids: Vec<i32> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
