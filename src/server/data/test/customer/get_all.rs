use super::*;

/// Tests listing customers with their embedded invoices.
///
/// Expected: Ok(Vec) in insertion order, invoices included
#[tokio::test]
async fn returns_customers_with_invoices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;
    factory::customer::CustomerFactory::new(db)
        .invoice(factory::customer::invoice_with_subtotal(25.0))
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let customers = repo.get_all().await?;

    assert_eq!(customers.len(), 2);
    assert!(customers[0].invoices.is_empty());
    assert_eq!(customers[1].invoices.len(), 1);
    assert_eq!(customers[1].invoices[0].subtotal, 25.0);
    assert_eq!(customers[1].invoices[0].line_items[0].name, "Widget");

    Ok(())
}
