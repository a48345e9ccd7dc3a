//! Content-addressed document storage.
//!
//! Rule sets and participant biographies are stored as text and referenced
//! by the SHA-256 of their content, so the same text always maps to the same
//! [`DocumentId`].

use std::fmt;
use std::str::FromStr;

use crate::error::{ErrorSeverity, GameError};
use crate::hash::content_hash;

/// Lowercase hex SHA-256 of a document's text.
///
/// Parsing and deserializing accept exactly 64 lowercase hex characters, so
/// an identifier is always safe to use as a file name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DocumentId(String);

impl DocumentId {
    const HEX_LEN: usize = 64;

    /// Computes the identifier for the given text.
    pub fn for_text(text: &str) -> Self {
        Self(content_hash(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(raw: &str) -> bool {
        raw.len() == Self::HEX_LEN && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl FromStr for DocumentId {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DocumentError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&raw) {
            Ok(Self(raw))
        } else {
            Err(DocumentError::InvalidId(raw))
        }
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors surfaced by a [`DocumentStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("document {0} not found")]
    NotFound(DocumentId),

    #[error("document storage failed: {0}")]
    Storage(String),

    #[error("'{0}' is not a document identifier")]
    InvalidId(String),
}

impl GameError for DocumentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::InvalidId(_) => ErrorSeverity::Validation,
            Self::Storage(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "DOCUMENT_NOT_FOUND",
            Self::Storage(_) => "DOCUMENT_STORAGE",
            Self::InvalidId(_) => "DOCUMENT_INVALID_ID",
        }
    }
}

/// Read/write access to rule and biography documents.
pub trait DocumentStore {
    /// Stores `text` and returns its content identifier.
    ///
    /// Storing identical text twice yields the same identifier.
    fn put(&mut self, text: &str) -> Result<DocumentId, DocumentError>;

    fn get(&self, id: &DocumentId) -> Result<String, DocumentError>;

    fn contains(&self, id: &DocumentId) -> bool {
        self.get(id).is_ok()
    }
}
