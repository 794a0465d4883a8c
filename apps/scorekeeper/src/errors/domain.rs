//! Domain-level error type used across the scoring engine, match store and CLI.
//!
//! Nothing in here knows about persistence or presentation. Callers that need
//! a stable machine-readable identifier should use [`DomainError::code`].

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Validation failures (caller contract violations and rule checks).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidBid,
    InvalidBooks,
    MissingBooks,
    PhaseMismatch,
    NoRounds,
    InvalidTeam,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Match,
    Team,
    Guest,
    Other(String),
}

/// Domain-level conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    DuplicateMatch,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or scoring rule violation
    #[error("validation error: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Malformed configuration value
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                ValidationKind::InvalidBooks => ErrorCode::InvalidBooks,
                ValidationKind::MissingBooks => ErrorCode::MissingBooks,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::NoRounds => ErrorCode::NoRounds,
                ValidationKind::InvalidTeam => ErrorCode::InvalidTeam,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::DuplicateMatch => ErrorCode::DuplicateMatch,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Match => ErrorCode::MatchNotFound,
                NotFoundKind::Team => ErrorCode::TeamNotFound,
                NotFoundKind::Guest => ErrorCode::GuestNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Config(_) => ErrorCode::ConfigError,
        }
    }
}
