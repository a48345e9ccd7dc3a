//! Providers that turn participants into actions.
//!
//! - [`AgentProvider`] runs an AI participant's in-character loop
//! - [`ParticipantFactory`] builds participants from biography attributes or documents

pub mod agent;
pub mod profile;

pub use agent::AgentProvider;
pub use profile::ParticipantFactory;
