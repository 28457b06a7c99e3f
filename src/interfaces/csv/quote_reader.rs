use crate::error::{LoanError, Result};
use serde::Deserialize;
use std::io::Read;

/// One raw batch row. Fields stay text so locale-aware parsing applies
/// downstream, exactly as for the interactive form.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct QuoteRow {
    pub amount: String,
    pub interest_rate: String,
    pub term_in_months: String,
}

/// Reads quote requests from a CSV source.
///
/// Wraps `csv::Reader` and yields an iterator of `Result<QuoteRow>`, with
/// whitespace trimming and flexible record lengths.
pub struct QuoteReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> QuoteReader<R> {
    /// Creates a new `QuoteReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn rows(self) -> impl Iterator<Item = Result<QuoteRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LoanError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "amount, interest_rate, term_in_months\n10000.00, 5.00, 60\n12000, 0, 24";
        let reader = QuoteReader::new(data.as_bytes());
        let rows: Vec<Result<QuoteRow>> = reader.rows().collect();

        assert_eq!(rows.len(), 2);
        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.amount, "10000.00");
        assert_eq!(first.term_in_months, "60");
    }

    #[test]
    fn test_reader_quoted_german_decimals() {
        let data = "amount,interest_rate,term_in_months\n\"10.000,00\",\"5,00\",60";
        let reader = QuoteReader::new(data.as_bytes());
        let rows: Vec<Result<QuoteRow>> = reader.rows().collect();

        assert_eq!(rows[0].as_ref().unwrap().amount, "10.000,00");
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "amount, interest_rate, term_in_months\n10000.00";
        let reader = QuoteReader::new(data.as_bytes());
        let rows: Vec<Result<QuoteRow>> = reader.rows().collect();

        assert!(rows[0].is_err());
    }
}
