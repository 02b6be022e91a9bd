//! Error types for the Annexure-C generator

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Errors raised while importing container particulars from CSV
#[derive(Debug, Error)]
pub enum ContainerCsvError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid date in row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid container size in row {row}: {value}")]
    InvalidSize { row: usize, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Form file error: {0}")]
    FormFile(String),

    #[error("Container CSV error: {0}")]
    ContainerCsv(#[from] ContainerCsvError),

    #[error("Template error: {0}")]
    Template(String),

    /// Net weight exceeds gross weight; no document is produced.
    #[error("Net weight cannot be more than gross weight.")]
    WeightConstraintViolation { gross_kg: f64, net_kg: f64 },

    #[error("Failed to open document: {0}")]
    Open(String),
}

pub type Result<T> = std::result::Result<T, Error>;
