use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::forms::FormErrors;

/// Unified error type for the domain, dialog and storage layers.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Pot not found: {0}")]
    PotNotFound(Uuid),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Validation failed: {0}")]
    Validation(FormErrors),
    #[error("No dialog is open")]
    NoActiveDialog,
    #[error("{0}")]
    DialogMismatch(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, DashboardError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] DashboardError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::StorageError(err.to_string())
    }
}

impl From<FormErrors> for DashboardError {
    fn from(errors: FormErrors) -> Self {
        DashboardError::Validation(errors)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}
