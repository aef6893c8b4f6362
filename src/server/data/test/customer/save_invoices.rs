use super::*;

fn invoice(subtotal: f64) -> Invoice {
    Invoice {
        subtotal,
        tax: 1.5,
        date_created: "2022-06-01".to_string(),
        date_shipped: "2022-06-02".to_string(),
        line_items: vec![LineItem {
            name: "Cable".to_string(),
            price: subtotal,
            quantity: 2.0,
        }],
    }
}

/// Tests replacing the invoice list of a customer.
///
/// Verifies the previously stored invoice is kept when the caller passes the full list.
///
/// Expected: Ok(Customer) with both invoices stored
#[tokio::test]
async fn saves_full_invoice_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::CustomerFactory::new(db)
        .invoice(factory::customer::invoice_with_subtotal(10.0))
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let existing = repo.find_by_user_name(&customer.user_name).await?.unwrap();

    let mut invoices = existing.invoices;
    invoices.push(invoice(42.0));
    let saved = repo.save_invoices(customer.id, invoices).await?;

    assert_eq!(saved.invoices.len(), 2);

    let stored = Customer::find_by_id(customer.id).one(db).await?.unwrap();
    assert_eq!(stored.invoices.0.len(), 2);
    assert_eq!(stored.invoices.0[0].subtotal, 10.0);
    assert_eq!(stored.invoices.0[1].subtotal, 42.0);
    assert_eq!(stored.invoices.0[1].line_items[0].quantity, 2.0);

    Ok(())
}

/// Tests saving invoices for a customer that no longer exists.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Customer).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let result = repo.save_invoices(999, vec![invoice(1.0)]).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
