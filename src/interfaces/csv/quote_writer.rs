use crate::application::engine::Quote;
use crate::error::Result;
use std::io::Write;

/// Writes computed quotes as CSV.
///
/// Output values are plain machine-readable decimals; the payment column
/// carries two fraction digits. Localized rendering is a display concern of
/// the interactive surfaces.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.writer.write_record([
            "amount",
            "interest_rate",
            "term_in_months",
            "monthly_payment",
        ])?;
        Ok(())
    }

    pub fn write_quote(&mut self, quote: &Quote) -> Result<()> {
        self.writer.write_record([
            quote.principal.to_string(),
            quote.annual_rate.to_string(),
            quote.term_in_months.to_string(),
            format!("{:.2}", quote.monthly_payment),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
