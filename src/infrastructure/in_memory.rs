use crate::domain::customer::Customer;
use crate::domain::offer::LoanOffer;
use crate::domain::ports::{CustomerStore, OfferStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for customers.
///
/// Uses `Arc<RwLock<HashMap<u32, Customer>>>` to allow shared concurrent
/// access. Ids are assigned sequentially on insert.
#[derive(Default, Clone)]
pub struct InMemoryCustomerStore {
    customers: Arc<RwLock<HashMap<u32, Customer>>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, mut customer: Customer) -> Result<Customer> {
        let mut customers = self.customers.write().await;
        customer.id = customers.keys().max().copied().unwrap_or(0) + 1;
        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get(&self, id: u32) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email == email).cloned())
    }
}

/// A thread-safe in-memory store for loan offers.
#[derive(Default, Clone)]
pub struct InMemoryOfferStore {
    offers: Arc<RwLock<HashMap<u32, LoanOffer>>>,
}

impl InMemoryOfferStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfferStore for InMemoryOfferStore {
    async fn insert(&self, mut offer: LoanOffer) -> Result<LoanOffer> {
        let mut offers = self.offers.write().await;
        offer.id = offers.keys().max().copied().unwrap_or(0) + 1;
        offers.insert(offer.id, offer.clone());
        Ok(offer)
    }

    async fn duplicate_exists(&self, offer: &LoanOffer) -> Result<bool> {
        let offers = self.offers.read().await;
        Ok(offers.values().any(|o| o.same_terms(offer)))
    }

    async fn for_customer(&self, customer_id: u32) -> Result<Vec<LoanOffer>> {
        let offers = self.offers.read().await;
        let mut found: Vec<LoanOffer> = offers
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        found.sort_by_key(|o| o.id);
        Ok(found)
    }
}
