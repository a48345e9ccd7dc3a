//! Sub-mechanic necessity oracle.

use crate::env::OracleError;
use crate::mechanics::MechanicKind;

/// Answer to "does this turn need dice / a card draw?".
///
/// `spec` carries the mechanic parameters as text: `<count>d<sides>` for dice,
/// a card count for cards. It is only meaningful when `item` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NecessityVerdict {
    pub item: Option<MechanicKind>,
    pub spec: String,
}

impl NecessityVerdict {
    /// Verdict declaring no sub-mechanic is needed.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn dice(spec: impl Into<String>) -> Self {
        Self {
            item: Some(MechanicKind::Dice),
            spec: spec.into(),
        }
    }

    pub fn cards(count: usize) -> Self {
        Self {
            item: Some(MechanicKind::Card),
            spec: count.to_string(),
        }
    }

    /// True when the verdict asks for the given mechanic.
    pub fn requires(&self, kind: MechanicKind) -> bool {
        self.item == Some(kind)
    }
}

/// Oracle deciding whether a sub-mechanic applies to the current turn.
///
/// `asking_about` names the mechanic the umpire is querying; an oracle may
/// still answer with a different `item`, which the umpire treats as "no".
pub trait NecessityOracle: Send + Sync {
    fn check(
        &self,
        turn_context: &str,
        asking_about: MechanicKind,
    ) -> Result<NecessityVerdict, OracleError>;
}
