use crate::domain::loan::LoanTerms;
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored loan offer for one customer.
///
/// Offers are unique per `(customer_id, amount, interest_rate,
/// term_in_months)`; the store duplicate check compares exactly those fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    #[serde(default)]
    pub id: u32,
    pub customer_id: u32,
    pub amount: Decimal,
    pub interest_rate: Decimal,
    pub term_in_months: u32,
}

impl LoanOffer {
    /// Sign and positivity rules for the offer terms.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(LoanError::ValidationError(
                "The loan amount must be greater than zero.".to_string(),
            ));
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(LoanError::ValidationError(
                "The interest rate cannot be negative.".to_string(),
            ));
        }
        if self.term_in_months == 0 {
            return Err(LoanError::ValidationError(
                "The term must be greater than zero months.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(self.amount, self.interest_rate, self.term_in_months)
    }

    /// The fixed monthly payment for this offer, in EUR cents precision.
    pub fn monthly_payment(&self) -> Result<Decimal> {
        self.terms().monthly_payment()
    }

    /// True when `other` collides with the uniqueness constraint.
    pub fn same_terms(&self, other: &LoanOffer) -> bool {
        self.customer_id == other.customer_id
            && self.amount == other.amount
            && self.interest_rate == other.interest_rate
            && self.term_in_months == other.term_in_months
    }
}
