//! Document storage for rule sets and participant biographies.
//!
//! Documents are UTF-8 text keyed by the SHA-256 of their content, so
//! storing the same text twice is a no-op that returns the same id.
//!
//! - [`InMemoryDocumentStore`] for tests and throwaway runs
//! - [`FileDocumentStore`] for sessions whose documents should outlive the process

mod file_documents;
mod memory_documents;

pub use file_documents::FileDocumentStore;
pub use memory_documents::InMemoryDocumentStore;
