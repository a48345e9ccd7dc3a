//! Append-only log of accepted actions.

use crate::action::ActionResponse;

/// Who produced a logged action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Actor {
    Umpire,
    Human { team: String, participant: String },
    Agent { team: String, participant: String },
}

impl Actor {
    pub fn team(&self) -> Option<&str> {
        match self {
            Self::Umpire => None,
            Self::Human { team, .. } | Self::Agent { team, .. } => Some(team),
        }
    }
}

/// An accepted action with enough context to reconstruct its provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    /// Position in the log, starting at zero.
    pub sequence: u64,
    pub actor: Actor,
    pub activity: String,
    pub action: ActionResponse,
    /// Attempt on which the action was accepted (1-based).
    pub attempt: u32,
}

/// Ordered, append-only sequence of accepted actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted action and returns its record.
    pub fn append(
        &mut self,
        actor: Actor,
        activity: impl Into<String>,
        action: ActionResponse,
        attempt: u32,
    ) -> &ActionRecord {
        let sequence = self.records.len() as u64;
        self.records.push(ActionRecord {
            sequence,
            actor,
            activity: activity.into(),
            action,
            attempt,
        });
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&ActionRecord> {
        self.records.last()
    }
}
