use crate::domain::payment::PaymentRequest;
use crate::error::{Result, ValidationErrors};
use serde::Serialize;
use std::io::Write;

/// Outcome of one batch row.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RowReport<'a> {
    Ok {
        row: usize,
        iban: &'a str,
        payload: &'a str,
    },
    Invalid {
        row: usize,
        errors: &'a ValidationErrors,
    },
}

impl<'a> RowReport<'a> {
    pub fn encoded(row: usize, request: &'a PaymentRequest, payload: &'a str) -> Self {
        RowReport::Ok {
            row,
            iban: request.iban().as_str(),
            payload,
        }
    }

    pub fn invalid(row: usize, errors: &'a ValidationErrors) -> Self {
        RowReport::Invalid { row, errors }
    }
}

/// Writes one JSON object per line.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_row(&mut self, report: &RowReport<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
