use crate::domain::payment::PaymentInput;
use crate::error::{QrError, Result};
use csv::StringRecord;
use std::io::Read;

/// Reads payment rows from a CSV source.
///
/// Expects a header row with `name`, `iban`, `amount` and optionally
/// `reference` and `bic`. Fields are trimmed and short rows are accepted, the
/// missing optional columns reading as blank.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    ///
    /// Rows shorter than the header are padded with blank fields first, so
    /// trailing optional columns may be left out.
    pub fn payments(mut self) -> impl Iterator<Item = Result<PaymentInput>> {
        let (headers, header_error) = match self.reader.headers() {
            Ok(headers) => (headers.clone(), None),
            Err(e) => (StringRecord::new(), Some(QrError::from(e))),
        };

        header_error
            .into_iter()
            .map(Err)
            .chain(self.reader.into_records().map(move |result| -> Result<PaymentInput> {
                let mut record = result?;
                while record.len() < headers.len() {
                    record.push_field("");
                }
                Ok(record.deserialize(Some(&headers))?)
            }))
    }
}
