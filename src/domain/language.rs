use crate::domain::loan::Field;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// The two supported display languages.
///
/// The active language governs decimal parsing (comma vs. period), currency
/// formatting, and which label/message table is rendered. The original form
/// starts in German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    De,
    En,
}

/// Per-field validation messages for one language.
#[derive(Debug)]
pub struct FieldMessages {
    pub amount: &'static str,
    pub interest_rate: &'static str,
    pub term: &'static str,
}

/// The full label table for one language.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub amount: &'static str,
    pub interest_rate: &'static str,
    pub term: &'static str,
    pub calculate: &'static str,
    pub monthly_payment: &'static str,
    /// Caption of the language toggle; names the *other* language.
    pub toggle: &'static str,
    pub errors: FieldMessages,
}

static DE: Labels = Labels {
    title: "Darlehensrechner",
    amount: "Darlehensbetrag (€):",
    interest_rate: "Jahreszinssatz (%):",
    term: "Laufzeit (Monate):",
    calculate: "Berechnen",
    monthly_payment: "Monatliche Zahlung: ",
    toggle: "Switch to English",
    errors: FieldMessages {
        amount: "Der Darlehensbetrag muss eine positive Zahl sein",
        interest_rate: "Der Zinssatz muss 0 oder eine positive Zahl sein",
        term: "Die Laufzeit muss eine positive Ganzzahl sein",
    },
};

static EN: Labels = Labels {
    title: "Loan Calculator",
    amount: "Loan Amount (€):",
    interest_rate: "Annual Interest Rate (%):",
    term: "Loan Term (months):",
    calculate: "Calculate",
    monthly_payment: "Monthly Payment: ",
    toggle: "Auf Deutsch wechseln",
    errors: FieldMessages {
        amount: "Loan amount must be a positive number",
        interest_rate: "Interest rate must be 0 or a positive number",
        term: "Loan term must be a positive integer",
    },
};

impl Language {
    /// Returns the static label table for this language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::De => &DE,
            Language::En => &EN,
        }
    }

    /// Returns the localized validation message for a field.
    pub fn error_message(self, field: Field) -> &'static str {
        let errors = &self.labels().errors;
        match field {
            Field::Amount => errors.amount,
            Field::InterestRate => errors.interest_rate,
            Field::Term => errors.term,
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }

    /// Parses a decimal text under this language's conventions.
    ///
    /// Grouping separators are stripped (German `.`, English `,`) and the
    /// German decimal comma becomes a period before parsing. Returns `None`
    /// for empty or malformed input.
    pub fn parse_decimal(self, raw: &str) -> Option<Decimal> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let normalized: String = match self {
            Language::De => raw
                .chars()
                .filter(|c| *c != '.')
                .map(|c| if c == ',' { '.' } else { c })
                .collect(),
            Language::En => raw.chars().filter(|c| *c != ',').collect(),
        };
        Decimal::from_str(&normalized).ok()
    }

    /// Formats a EUR amount under this language's conventions.
    ///
    /// German: `1.234,56 €`. English: `€1,234.56`. Two fraction digits,
    /// half-up rounding.
    pub fn format_currency(self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        match self {
            Language::De => format!("{sign}{},{fraction} €", group_digits(whole, '.')),
            Language::En => format!("{sign}€{}.{fraction}", group_digits(whole, ',')),
        }
    }
}

/// Inserts a grouping separator every three digits, counted from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            other => Err(format!("unknown language '{other}', expected 'de' or 'en'")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::De => write!(f, "de"),
            Language::En => write!(f, "en"),
        }
    }
}
