use crate::domain::customer::Customer;
use crate::domain::offer::LoanOffer;
use crate::domain::ports::{CustomerStore, OfferStore};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    customers: BTreeMap<u32, Customer>,
    offers: BTreeMap<u32, LoanOffer>,
}

/// A file-backed store implementing both ports.
///
/// The whole data set is held in memory and written back as one JSON
/// snapshot after every mutation. Clone to hand the same store to both
/// boxed ports.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    state: Arc<RwLock<Snapshot>>,
}

impl JsonFileStore {
    /// Opens the store, loading an existing snapshot if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let snapshot = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Snapshot::default()
        };
        Ok(Self {
            path,
            state: Arc::new(RwLock::new(snapshot)),
        })
    }

    fn persist(&self, snapshot: &Snapshot) -> Result<()> {
        let data = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for JsonFileStore {
    async fn insert(&self, mut customer: Customer) -> Result<Customer> {
        let mut state = self.state.write().await;
        customer.id = state.customers.keys().next_back().copied().unwrap_or(0) + 1;
        state.customers.insert(customer.id, customer.clone());
        self.persist(&state)?;
        Ok(customer)
    }

    async fn get(&self, id: u32) -> Result<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state.customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state.customers.values().find(|c| c.email == email).cloned())
    }
}

#[async_trait]
impl OfferStore for JsonFileStore {
    async fn insert(&self, mut offer: LoanOffer) -> Result<LoanOffer> {
        let mut state = self.state.write().await;
        offer.id = state.offers.keys().next_back().copied().unwrap_or(0) + 1;
        state.offers.insert(offer.id, offer.clone());
        self.persist(&state)?;
        Ok(offer)
    }

    async fn duplicate_exists(&self, offer: &LoanOffer) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state.offers.values().any(|o| o.same_terms(offer)))
    }

    async fn for_customer(&self, customer_id: u32) -> Result<Vec<LoanOffer>> {
        let state = self.state.read().await;
        Ok(state
            .offers
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }
}
