use super::*;

/// Tests creating a customer.
///
/// Expected: Ok(Customer) with an empty invoice list
#[tokio::test]
async fn creates_customer_without_invoices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo
        .create(CreateCustomerParam {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
        })
        .await?;

    assert_eq!(customer.user_name, "ada");
    assert!(customer.invoices.is_empty());

    let stored = Customer::find_by_id(customer.id).one(db).await?.unwrap();
    assert_eq!(stored.first_name, "Ada");
    assert!(stored.invoices.0.is_empty());

    Ok(())
}
