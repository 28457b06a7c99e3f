use crate::domain::language::Language;
use crate::error::{LoanError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeSet;
use std::fmt;

/// The three form fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Amount,
    InterestRate,
    Term,
}

impl Field {
    /// Language-neutral field key, as used in machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::InterestRate => "interest_rate",
            Field::Term => "term",
        }
    }
}

/// The set of fields that failed validation, at most one entry per field.
///
/// Message text is resolved against a [`Language`] at display time, so a
/// language toggle re-localizes pending messages without re-validating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeSet<Field>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn insert(&mut self, field: Field) {
        self.fields.insert(field);
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    /// Resolves each failed field to its message in the given language.
    pub fn localized(&self, language: Language) -> Vec<(Field, &'static str)> {
        self.fields
            .iter()
            .map(|&f| (f, language.error_message(f)))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in &self.fields {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", field.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// One form submission: the three raw field texts and the language that
/// governed their entry. Transient, discarded after the submit cycle.
#[derive(Debug, Clone)]
pub struct LoanInput {
    pub amount: String,
    pub interest_rate: String,
    pub term: String,
    pub language: Language,
}

impl LoanInput {
    pub fn new(
        amount: impl Into<String>,
        interest_rate: impl Into<String>,
        term: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            amount: amount.into(),
            interest_rate: interest_rate.into(),
            term: term.into(),
            language,
        }
    }

    /// Checks all three fields and reports every failure at once.
    ///
    /// Amount must parse (locale-aware) to a value strictly above zero.
    /// Interest rate must parse to a value of at least zero; empty input
    /// fails. The term is a strict positive integer in both languages.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        match self.language.parse_decimal(&self.amount) {
            Some(v) if v > Decimal::ZERO => {}
            _ => errors.insert(Field::Amount),
        }
        match self.language.parse_decimal(&self.interest_rate) {
            Some(v) if v >= Decimal::ZERO => {}
            _ => errors.insert(Field::InterestRate),
        }
        match self.parse_term() {
            Some(n) if n > 0 => {}
            _ => errors.insert(Field::Term),
        }
        errors
    }

    /// Validates and derives the numeric loan terms.
    pub fn to_terms(&self) -> std::result::Result<LoanTerms, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        // Validation guarantees all three parses succeed.
        let principal = self.language.parse_decimal(&self.amount).unwrap_or_default();
        let annual_rate = self
            .language
            .parse_decimal(&self.interest_rate)
            .unwrap_or_default();
        let num_payments = self.parse_term().unwrap_or(1);
        Ok(LoanTerms::new(principal, annual_rate, num_payments))
    }

    fn parse_term(&self) -> Option<u32> {
        self.term.trim().parse::<u32>().ok()
    }
}

/// Normalized loan terms, immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    /// Loan principal in EUR.
    pub principal: Decimal,
    /// Annual interest rate in percent, as entered.
    pub annual_rate: Decimal,
    /// Monthly rate as a decimal fraction (annual percent / 100 / 12).
    pub monthly_rate: Decimal,
    /// Term in months.
    pub num_payments: u32,
}

impl LoanTerms {
    pub fn new(principal: Decimal, annual_rate: Decimal, num_payments: u32) -> Self {
        Self {
            principal,
            annual_rate,
            monthly_rate: annual_rate / Decimal::from(1200),
            num_payments,
        }
    }

    /// Computes the fixed monthly payment, rounded half-up to cents.
    ///
    /// Zero-rate loans amortize as a straight division. Otherwise the
    /// standard annuity formula applies:
    /// `payment = principal * x * r / (x - 1)` with `x = (1 + r)^n`.
    pub fn monthly_payment(&self) -> Result<Decimal> {
        let raw = if self.monthly_rate.is_zero() {
            self.principal / Decimal::from(self.num_payments)
        } else {
            let x = compound_factor(self.monthly_rate, self.num_payments)?;
            self.principal
                .checked_mul(x)
                .and_then(|v| v.checked_mul(self.monthly_rate))
                .and_then(|v| v.checked_div(x - Decimal::ONE))
                .ok_or_else(|| {
                    LoanError::CalculationError("monthly payment overflowed".to_string())
                })?
        };
        Ok(raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// `(1 + rate)^n` by checked square-and-multiply.
fn compound_factor(rate: Decimal, n: u32) -> Result<Decimal> {
    let overflow = || LoanError::CalculationError("compound factor overflowed".to_string());
    let mut base = Decimal::ONE + rate;
    let mut exp = n;
    let mut acc = Decimal::ONE;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.checked_mul(base).ok_or_else(overflow)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base).ok_or_else(overflow)?;
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(amount: &str, rate: &str, term: &str) -> LoanInput {
        LoanInput::new(amount, rate, term, Language::En)
    }

    #[test]
    fn test_validate_negative_amount() {
        let errors = input("-1000", "5", "60").validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Amount));
    }

    #[test]
    fn test_validate_negative_rate() {
        let errors = input("1000", "-5", "60").validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::InterestRate));
    }

    #[test]
    fn test_validate_zero_term() {
        let errors = input("1000", "5", "0").validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Term));
    }

    #[test]
    fn test_validate_all_valid() {
        assert!(input("1000", "5", "60").validate().is_empty());
    }

    #[test]
    fn test_validate_empty_and_zero_rate_differ() {
        // Empty rate fails; an explicit zero is accepted.
        let errors = input("1000", "", "60").validate();
        assert!(errors.contains(Field::InterestRate));
        assert!(input("1000", "0", "60").validate().is_empty());
    }

    #[test]
    fn test_validate_zero_and_garbage_amount() {
        assert!(input("0", "5", "60").validate().contains(Field::Amount));
        assert!(input("", "5", "60").validate().contains(Field::Amount));
        assert!(input("abc", "5", "60").validate().contains(Field::Amount));
    }

    #[test]
    fn test_validate_non_integral_term() {
        assert!(input("1000", "5", "2.5").validate().contains(Field::Term));
        assert!(input("1000", "5", "-12").validate().contains(Field::Term));
        assert!(input("1000", "5", "sixty").validate().contains(Field::Term));
    }

    #[test]
    fn test_validate_reports_all_failures() {
        let errors = input("-1", "-1", "0").validate();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_monthly_payment_standard() {
        let terms = LoanTerms::new(dec!(10000), dec!(5), 60);
        assert_eq!(terms.monthly_payment().unwrap(), dec!(188.71));
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        let terms = LoanTerms::new(dec!(12000), dec!(0), 24);
        assert_eq!(terms.monthly_payment().unwrap(), dec!(500.00));
    }

    #[test]
    fn test_monthly_payment_single_installment() {
        let terms = LoanTerms::new(dec!(1000), dec!(0), 1);
        assert_eq!(terms.monthly_payment().unwrap(), dec!(1000));
    }

    #[test]
    fn test_locale_round_trip_identical_terms() {
        let de = LoanInput::new("10.000,00", "5,00", "60", Language::De);
        let en = LoanInput::new("10000.00", "5.00", "60", Language::En);
        let de_terms = de.to_terms().unwrap();
        let en_terms = en.to_terms().unwrap();
        assert_eq!(de_terms, en_terms);
        assert_eq!(
            de_terms.monthly_payment().unwrap(),
            en_terms.monthly_payment().unwrap()
        );
    }

    #[test]
    fn test_to_terms_monthly_rate() {
        let terms = input("1000", "6", "12").to_terms().unwrap();
        assert_eq!(terms.monthly_rate, dec!(0.005));
        assert_eq!(terms.num_payments, 12);
    }

    #[test]
    fn test_to_terms_surfaces_errors() {
        let errors = input("0", "5", "60").to_terms().unwrap_err();
        assert!(errors.contains(Field::Amount));
    }

    #[test]
    fn test_localized_messages() {
        let errors = input("-1000", "5", "60").validate();
        let de = errors.localized(Language::De);
        assert_eq!(
            de,
            vec![(Field::Amount, "Der Darlehensbetrag muss eine positive Zahl sein")]
        );
        let en = errors.localized(Language::En);
        assert_eq!(en, vec![(Field::Amount, "Loan amount must be a positive number")]);
    }
}
