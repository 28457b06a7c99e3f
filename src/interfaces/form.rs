use crate::domain::language::{Labels, Language};
use crate::domain::loan::{Field, LoanInput, ValidationErrors};
use crate::error::Result;

/// The complete state of the calculator form.
///
/// Owned by the presentation layer and passed by reference to the handler
/// functions; there is no global state. The form starts in German, like the
/// original widget.
#[derive(Debug, Default)]
pub struct FormState {
    pub amount: String,
    pub interest_rate: String,
    pub term: String,
    pub language: Language,
    /// Failed fields of the last submission; empty when the last submission
    /// succeeded or nothing was submitted yet.
    pub errors: ValidationErrors,
    /// The last successfully computed payment, already formatted.
    pub monthly_payment: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.amount = value.into();
    }

    pub fn set_interest_rate(&mut self, value: impl Into<String>) {
        self.interest_rate = value.into();
    }

    pub fn set_term(&mut self, value: impl Into<String>) {
        self.term = value.into();
    }

    /// Submits the form: validate, then calculate and format.
    ///
    /// On validation failure the error set is recorded and the previously
    /// displayed payment is left untouched. Only a calculation overflow
    /// surfaces as a hard error.
    pub fn submit(&mut self) -> Result<()> {
        let input = LoanInput::new(
            self.amount.clone(),
            self.interest_rate.clone(),
            self.term.clone(),
            self.language,
        );
        match input.to_terms() {
            Err(errors) => {
                self.errors = errors;
            }
            Ok(terms) => {
                let payment = terms.monthly_payment()?;
                self.errors.clear();
                self.monthly_payment = Some(self.language.format_currency(payment));
            }
        }
        Ok(())
    }

    /// Flips the language. A pure state flip: pending errors and any
    /// displayed payment are untouched; labels and messages re-localize on
    /// the next render.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// The label table for the current language.
    pub fn labels(&self) -> &'static Labels {
        self.language.labels()
    }

    /// Pending error messages in the current language.
    pub fn error_messages(&self) -> Vec<(Field, &'static str)> {
        self.errors.localized(self.language)
    }
}
