//! name-normalizer: canonical, comparable forms for free-text names.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod tabular;
pub mod telemetry;

pub use normalizer::{normalize, normalize_bytes, NormalizedName};
