use loancalc::domain::customer::Customer;
use loancalc::domain::offer::LoanOffer;
use loancalc::domain::ports::{CustomerStoreBox, OfferStoreBox};
use loancalc::infrastructure::in_memory::{InMemoryCustomerStore, InMemoryOfferStore};
use rust_decimal_macros::dec;

fn customer() -> Customer {
    Customer {
        id: 0,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        street: "Main Street".to_string(),
        house_number: "1".to_string(),
        postal_code: "10115".to_string(),
        city: "Berlin".to_string(),
        state: "Berlin".to_string(),
        phone_number: "+491234567890".to_string(),
        email: "jane@example.com".to_string(),
    }
}

#[tokio::test]
async fn test_stores_as_trait_objects() {
    let customer_store: CustomerStoreBox = Box::new(InMemoryCustomerStore::new());
    let offer_store: OfferStoreBox = Box::new(InMemoryOfferStore::new());

    let offer = LoanOffer {
        id: 0,
        customer_id: 1,
        amount: dec!(10000),
        interest_rate: dec!(5),
        term_in_months: 60,
    };

    // Verify Send + Sync by spawning tasks
    let cs_handle = tokio::spawn(async move {
        customer_store.insert(customer()).await.unwrap();
        customer_store.get(1).await.unwrap().unwrap()
    });

    let os_handle = tokio::spawn(async move {
        offer_store.insert(offer).await.unwrap();
        offer_store.for_customer(1).await.unwrap()
    });

    let retrieved_customer = cs_handle.await.unwrap();
    assert_eq!(retrieved_customer.id, 1);

    let retrieved_offers = os_handle.await.unwrap();
    assert_eq!(retrieved_offers.len(), 1);
    assert_eq!(retrieved_offers[0].monthly_payment().unwrap(), dec!(188.71));
}
