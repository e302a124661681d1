//! Transaction identifiers
//!
//! Identifiers live in the first column of the sheet. New rows get a UUID v4,
//! but rows written by older tools may carry any non-empty string, so the
//! identifier is kept as an opaque string rather than a parsed UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a transaction row
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display (first 8 characters)
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }
        if s.contains(',') || s.contains('\n') {
            return Err(IdParseError::InvalidCharacters(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

/// Error type for identifier parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    Empty,
    InvalidCharacters(String),
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Identifier cannot be empty"),
            Self::InvalidCharacters(s) => {
                write!(f, "Identifier contains invalid characters: {}", s)
            }
        }
    }
}

impl std::error::Error for IdParseError {}
