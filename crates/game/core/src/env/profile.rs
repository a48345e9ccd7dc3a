//! Biography question answering.

use crate::env::OracleError;

/// Oracle answering questions about a biography document.
///
/// Used to derive missing character attributes when a participant is built
/// from a document rather than from explicit attributes.
pub trait ProfileOracle: Send + Sync {
    fn answer(&self, question: &str, document: &str) -> Result<String, OracleError>;
}
