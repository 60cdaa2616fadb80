use clap::Args;
use name_normalizer::error::AppError;
use name_normalizer::tabular::ColumnNormalizer;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CsvArgs {
    /// Header of the column holding the names to normalize
    #[arg(long)]
    pub column: String,
    /// Read the CSV from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Keep the source column and append the normalized values under this header
    #[arg(long)]
    pub output_column: Option<String>,
}

impl CsvArgs {
    fn normalizer(&self) -> ColumnNormalizer {
        let normalizer = ColumnNormalizer::new(self.column.as_str());
        match &self.output_column {
            Some(name) => normalizer.with_output_column(name.as_str()),
            None => normalizer,
        }
    }
}

/// Rewrites the requested column from `--input` (or `stdin`) into `output`.
pub fn run_csv<R: Read, W: Write>(args: &CsvArgs, stdin: R, output: W) -> Result<(), AppError> {
    let normalizer = args.normalizer();
    let summary = match &args.input {
        Some(path) => normalizer.rewrite_path(path, output)?,
        None => normalizer.rewrite_reader(stdin, output)?,
    };

    info!(
        column = %args.column,
        rows = summary.rows,
        changed = summary.changed,
        "csv column normalized"
    );
    Ok(())
}
