//! Traits describing the external collaborators the game consults.
//!
//! Oracles answer content questions (what action to take, whether it is
//! legal, whether it fits a character, whether dice are needed) and are
//! trusted for content but not for protocol: the umpire decides how many
//! times to ask and what to do with the answers. The [`DocumentStore`] keeps
//! rule and biography text addressed by content hash, and [`RngOracle`]
//! supplies reproducible randomness.
//!
//! Every call is synchronous and either returns an answer or a definite
//! [`OracleError`].
mod actions;
mod bio;
mod documents;
mod error;
mod legality;
mod necessity;
mod profile;
mod report;
mod rng;

pub use actions::ActionOracle;
pub use bio::BioOracle;
pub use documents::{DocumentError, DocumentId, DocumentStore};
pub use error::OracleError;
pub use legality::LegalityOracle;
pub use necessity::{NecessityOracle, NecessityVerdict};
pub use profile::ProfileOracle;
pub use report::{ReportOracle, WinVerdict};
pub use rng::{PcgRng, RngOracle};
