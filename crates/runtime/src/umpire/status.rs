//! Read-only game status snapshot fed back into oracle calls.

use serde::Serialize;
use wargame_core::{ActionRecord, ResourceLedger, TeamRegistry};

/// Composite of the action log, the team registry and the resource ledger.
///
/// Serialized as JSON when handed to the legality and action oracles.
#[derive(Debug, Clone, Serialize)]
pub struct GameStatus<'a> {
    pub actions: &'a [ActionRecord],
    pub teams: Vec<TeamStatus<'a>>,
    pub resources: Vec<ResourceEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamStatus<'a> {
    pub name: &'a str,
    pub participants: Vec<ParticipantStatus<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantStatus<'a> {
    pub identity: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub is_human: bool,
    pub actions_taken: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceEntry<'a> {
    pub team: &'a str,
    pub participant: &'a str,
    pub resource: &'a str,
    pub amount: i64,
}

impl<'a> GameStatus<'a> {
    pub fn new(
        actions: &'a [ActionRecord],
        teams: &'a TeamRegistry,
        ledger: &'a ResourceLedger,
    ) -> Self {
        let teams = teams
            .iter()
            .map(|(name, participants)| TeamStatus {
                name,
                participants: participants
                    .iter()
                    .map(|participant| ParticipantStatus {
                        identity: participant.identity(),
                        name: participant.name(),
                        is_human: participant.is_human(),
                        actions_taken: participant.action_history().len(),
                    })
                    .collect(),
            })
            .collect();

        let resources = ledger
            .iter()
            .map(|(key, amount)| ResourceEntry {
                team: &key.team,
                participant: &key.participant,
                resource: &key.resource,
                amount,
            })
            .collect();

        Self {
            actions,
            teams,
            resources,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
