//! Normalization of one column in a headed CSV document.

use crate::normalizer::normalize;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CsvNormalizeError {
    #[error("failed to read or write CSV data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("column '{column}' not found in header [{available}]")]
    MissingColumn { column: String, available: String },
    #[error("output column '{0}' already exists in the header")]
    DuplicateColumn(String),
}

/// Counts reported after a column has been rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSummary {
    pub rows: usize,
    pub changed: usize,
}

/// Rewrites a named column with normalized values, either in place or into a
/// newly appended key column.
///
/// Fields are copied through byte-for-byte apart from the target column.
///
/// Header names are resolved by exact match first and then by their normalized
/// form, so `"full name"` finds a `Full Name` header and also a `full_name` one.
/// The output column is checked the same way: it is rejected if any existing
/// header resolves to it.
#[derive(Debug, Clone)]
pub struct ColumnNormalizer {
    column: String,
    output_column: Option<String>,
}

impl ColumnNormalizer {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            output_column: None,
        }
    }

    /// Keeps the source column and appends the normalized values under `name`.
    pub fn with_output_column(mut self, name: impl Into<String>) -> Self {
        self.output_column = Some(name.into());
        self
    }

    pub fn rewrite_path<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        writer: W,
    ) -> Result<ColumnSummary, CsvNormalizeError> {
        let file = std::fs::File::open(path)?;
        self.rewrite_reader(file, writer)
    }

    pub fn rewrite_reader<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<ColumnSummary, CsvNormalizeError> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
        let mut csv_writer = csv::Writer::from_writer(writer);

        let headers = csv_reader.headers()?.clone();
        let index =
            find_header(&headers, &self.column).ok_or_else(|| CsvNormalizeError::MissingColumn {
                column: self.column.clone(),
                available: headers.iter().collect::<Vec<_>>().join(", "),
            })?;

        let mut out_headers = headers.clone();
        if let Some(output) = &self.output_column {
            if find_header(&headers, output).is_some() {
                return Err(CsvNormalizeError::DuplicateColumn(output.clone()));
            }
            out_headers.push_field(output);
        }
        csv_writer.write_record(&out_headers)?;

        let mut summary = ColumnSummary::default();
        for record in csv_reader.records() {
            let record = record?;
            let original = record.get(index).unwrap_or_default();
            let normalized = normalize(original);
            if normalized != original {
                summary.changed += 1;
            }

            let row: csv::StringRecord = match &self.output_column {
                Some(_) => {
                    let mut row = record.clone();
                    row.push_field(&normalized);
                    row
                }
                None => record
                    .iter()
                    .enumerate()
                    .map(|(position, field)| {
                        if position == index {
                            normalized.as_str()
                        } else {
                            field
                        }
                    })
                    .collect(),
            };
            csv_writer.write_record(&row)?;
            summary.rows += 1;
        }

        csv_writer.flush()?;
        tracing::debug!(
            column = %self.column,
            rows = summary.rows,
            changed = summary.changed,
            "normalized csv column"
        );
        Ok(summary)
    }
}

fn find_header(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name).or_else(|| {
        let wanted = normalize(name);
        headers.iter().position(|header| normalize(header) == wanted)
    })
}
