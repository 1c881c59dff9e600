//! Error types for ns-gateway.

use thiserror::Error;

/// A rejected inbound location report.
///
/// Every variant maps to HTTP 400: the report is the caller's fault and no
/// state was touched.
#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("missing coordinate `{0}`")]
    MissingCoordinate(&'static str),

    #[error("coordinate `{field}` is not a finite number: {value}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
    },

    #[error("malformed report: {0}")]
    Malformed(String),
}

impl ReportError {
    /// HTTP-equivalent status for the rejection.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingCoordinate(_)
            | Self::InvalidCoordinate { .. }
            | Self::Malformed(_) => 400,
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
