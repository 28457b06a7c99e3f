use super::customer::Customer;
use super::offer::LoanOffer;
use crate::error::Result;
use async_trait::async_trait;

pub type CustomerStoreBox = Box<dyn CustomerStore>;
pub type OfferStoreBox = Box<dyn OfferStore>;

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Stores a new customer, assigning its id. Returns the stored record.
    async fn insert(&self, customer: Customer) -> Result<Customer>;
    async fn get(&self, id: u32) -> Result<Option<Customer>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;
}

#[async_trait]
pub trait OfferStore: Send + Sync {
    /// Stores a new offer, assigning its id. Returns the stored record.
    async fn insert(&self, offer: LoanOffer) -> Result<LoanOffer>;
    /// True when an offer with the same uniqueness key already exists.
    async fn duplicate_exists(&self, offer: &LoanOffer) -> Result<bool>;
    async fn for_customer(&self, customer_id: u32) -> Result<Vec<LoanOffer>>;
}
