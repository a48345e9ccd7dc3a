//! Bundle of oracle handles the runtime consults.
//!
//! The oracle traits live in `wargame-core`; implementations are supplied by
//! the embedding application (a language-model backend, or the scripted
//! oracles from `wargame-content`). [`OracleManager`] keeps one shared handle
//! per capability so the umpire, agents and participant factory can all
//! reach them without owning them.
use std::sync::Arc;

use wargame_core::{
    ActionOracle, BioOracle, LegalityOracle, NecessityOracle, PcgRng, ProfileOracle,
    ReportOracle, RngOracle,
};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    actions: Arc<dyn ActionOracle>,
    legality: Arc<dyn LegalityOracle>,
    bio: Arc<dyn BioOracle>,
    necessity: Arc<dyn NecessityOracle>,
    profile: Arc<dyn ProfileOracle>,
    report: Arc<dyn ReportOracle>,
    rng: Arc<dyn RngOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager with the PCG random source.
    pub fn new(
        actions: Arc<dyn ActionOracle>,
        legality: Arc<dyn LegalityOracle>,
        bio: Arc<dyn BioOracle>,
        necessity: Arc<dyn NecessityOracle>,
        profile: Arc<dyn ProfileOracle>,
        report: Arc<dyn ReportOracle>,
    ) -> Self {
        Self {
            actions,
            legality,
            bio,
            necessity,
            profile,
            report,
            rng: Arc::new(PcgRng),
        }
    }

    /// Uses one object for every judgment capability.
    pub fn from_shared<O>(oracle: Arc<O>) -> Self
    where
        O: ActionOracle
            + LegalityOracle
            + BioOracle
            + NecessityOracle
            + ProfileOracle
            + ReportOracle
            + 'static,
    {
        Self::new(
            oracle.clone(),
            oracle.clone(),
            oracle.clone(),
            oracle.clone(),
            oracle.clone(),
            oracle,
        )
    }

    /// Replaces the random source (tests inject fixed sequences here).
    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    pub fn actions(&self) -> &dyn ActionOracle {
        self.actions.as_ref()
    }

    pub fn legality(&self) -> &dyn LegalityOracle {
        self.legality.as_ref()
    }

    pub fn bio(&self) -> &dyn BioOracle {
        self.bio.as_ref()
    }

    pub fn necessity(&self) -> &dyn NecessityOracle {
        self.necessity.as_ref()
    }

    pub fn profile(&self) -> &dyn ProfileOracle {
        self.profile.as_ref()
    }

    pub fn report(&self) -> &dyn ReportOracle {
        self.report.as_ref()
    }

    pub fn rng(&self) -> &dyn RngOracle {
        self.rng.as_ref()
    }
}
