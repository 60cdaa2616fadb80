use clap::ValueEnum;
use name_normalizer::error::AppError;
use name_normalizer::normalizer::normalize_bytes;
use name_normalizer::NormalizedName;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The normalized line only
    #[default]
    Text,
    /// One `{"input", "normalized"}` object per line
    Json,
}

#[derive(Debug, Serialize)]
pub struct NormalizationRecord<'a> {
    pub input: Cow<'a, str>,
    pub normalized: NormalizedName,
}

impl<'a> NormalizationRecord<'a> {
    /// Invalid UTF-8 is replaced with U+FFFD; JSON strings cannot carry it.
    pub fn from_bytes(raw: &'a [u8]) -> Self {
        let input = String::from_utf8_lossy(raw);
        let normalized = NormalizedName::new(&input);
        Self { input, normalized }
    }
}

/// Writes the normalized form of `raw` followed by a newline.
pub fn write_normalized<W: Write>(
    output: &mut W,
    raw: &[u8],
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => output.write_all(&normalize_bytes(raw))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, &NormalizationRecord::from_bytes(raw))?
        }
    }
    output.write_all(b"\n")?;
    Ok(())
}
