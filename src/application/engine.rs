use crate::domain::customer::Customer;
use crate::domain::loan::LoanInput;
use crate::domain::offer::LoanOffer;
use crate::domain::ports::{CustomerStoreBox, OfferStoreBox};
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// A computed payment quote for one loan input.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub principal: Decimal,
    pub annual_rate: Decimal,
    pub term_in_months: u32,
    pub monthly_payment: Decimal,
    /// Currency rendering under the language the input was entered in.
    pub display: String,
}

/// A customer together with all stored offers, the detail representation.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,
    pub loan_offers: Vec<OfferWithPayment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferWithPayment {
    #[serde(flatten)]
    pub offer: LoanOffer,
    pub monthly_payment: Decimal,
}

/// The main entry point of the application.
///
/// `LoanEngine` owns the storage backends. Quoting is pure arithmetic and
/// touches no store; customer and offer management persist through the
/// boxed ports.
pub struct LoanEngine {
    customer_store: CustomerStoreBox,
    offer_store: OfferStoreBox,
}

impl LoanEngine {
    pub fn new(customer_store: CustomerStoreBox, offer_store: OfferStoreBox) -> Self {
        Self {
            customer_store,
            offer_store,
        }
    }

    /// Validates a raw form input and computes the monthly payment.
    ///
    /// Field failures come back as `LoanError::InvalidInput` carrying the
    /// per-field error set; no computation happens in that case.
    pub fn quote(&self, input: &LoanInput) -> Result<Quote> {
        let terms = input.to_terms()?;
        let payment = terms.monthly_payment()?;
        Ok(Quote {
            principal: terms.principal,
            annual_rate: terms.annual_rate,
            term_in_months: terms.num_payments,
            monthly_payment: payment,
            display: input.language.format_currency(payment),
        })
    }

    /// Validates, normalizes, and stores a new customer.
    ///
    /// Email addresses are unique across the store.
    pub async fn create_customer(&self, mut customer: Customer) -> Result<Customer> {
        customer.validate()?;
        customer.normalize_phone_number();
        if self
            .customer_store
            .find_by_email(&customer.email)
            .await?
            .is_some()
        {
            return Err(LoanError::ValidationError(format!(
                "A customer with email {} already exists.",
                customer.email
            )));
        }
        self.customer_store.insert(customer).await
    }

    /// Validates and stores a new loan offer for an existing customer.
    ///
    /// Offers are unique per customer, amount, interest rate, and term.
    pub async fn create_offer(&self, offer: LoanOffer) -> Result<OfferWithPayment> {
        offer.validate()?;
        if self
            .customer_store
            .get(offer.customer_id)
            .await?
            .is_none()
        {
            return Err(LoanError::CustomerNotFound(offer.customer_id));
        }
        if self.offer_store.duplicate_exists(&offer).await? {
            return Err(LoanError::DuplicateOffer(offer.customer_id));
        }
        let stored = self.offer_store.insert(offer).await?;
        let monthly_payment = stored.monthly_payment()?;
        Ok(OfferWithPayment {
            offer: stored,
            monthly_payment,
        })
    }

    /// Fetches a customer together with all stored offers.
    pub async fn customer_detail(&self, id: u32) -> Result<CustomerDetail> {
        let customer = self
            .customer_store
            .get(id)
            .await?
            .ok_or(LoanError::CustomerNotFound(id))?;
        let mut loan_offers = Vec::new();
        for offer in self.offer_store.for_customer(id).await? {
            let monthly_payment = offer.monthly_payment()?;
            loan_offers.push(OfferWithPayment {
                offer,
                monthly_payment,
            });
        }
        Ok(CustomerDetail {
            customer,
            loan_offers,
        })
    }
}
