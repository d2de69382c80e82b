use std::fmt;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::leave::{LeaveDeskError, LeaveImportError};

/// Application-level failures surfaced at the binary boundary.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Import(LeaveImportError),
    Desk(LeaveDeskError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
            AppError::Import(err) => write!(f, "import error: {err}"),
            AppError::Desk(err) => write!(f, "leave desk error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Desk(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<TelemetryError> for AppError {
    fn from(err: TelemetryError) -> Self {
        AppError::Telemetry(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<LeaveImportError> for AppError {
    fn from(err: LeaveImportError) -> Self {
        AppError::Import(err)
    }
}

impl From<LeaveDeskError> for AppError {
    fn from(err: LeaveDeskError) -> Self {
        AppError::Desk(err)
    }
}
