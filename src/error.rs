// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineDataError {
    #[error("Unsupported point data version: found {found}, this build supports up to {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("No migration step registered for point data version {version}")]
    MissingMigrationStep { version: u32 },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type SplineResult<T> = Result<T, SplineDataError>;
