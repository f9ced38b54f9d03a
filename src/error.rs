//! Error types for `harvard-cite`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CitationError {
    #[error("invalid page: {0} (expected a single page or a from-to pair)")]
    InvalidPage(String),

    #[error("at least one name is required")]
    EmptyNames,

    #[error("name at position {0} is blank")]
    EmptyName(usize),

    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u8),
}

pub type Result<T, E = CitationError> = std::result::Result<T, E>;
