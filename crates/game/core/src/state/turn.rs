//! Round plan types.

use crate::config::GameConfig;

/// One unit of required activity.
///
/// `target` is either the umpire sentinel ([`GameConfig::UMPIRE`]) or the
/// identity / display name of a participant inside `team`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    #[cfg_attr(feature = "serde", serde(default))]
    pub team: Option<String>,
    pub target: String,
    pub activity: String,
}

/// Who a turn is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnTarget<'a> {
    Umpire,
    Participant { team: Option<&'a str>, name: &'a str },
}

impl Turn {
    pub fn new(team: Option<&str>, target: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            team: team.map(str::to_owned),
            target: target.into(),
            activity: activity.into(),
        }
    }

    /// A turn the umpire performs itself.
    pub fn umpire(activity: impl Into<String>) -> Self {
        Self::new(None, GameConfig::UMPIRE, activity)
    }

    /// A turn for a participant of `team`.
    pub fn for_participant(
        team: impl Into<String>,
        target: impl Into<String>,
        activity: impl Into<String>,
    ) -> Self {
        Self {
            team: Some(team.into()),
            target: target.into(),
            activity: activity.into(),
        }
    }

    pub fn target(&self) -> TurnTarget<'_> {
        if self.target == GameConfig::UMPIRE {
            TurnTarget::Umpire
        } else {
            TurnTarget::Participant {
                team: self.team.as_deref(),
                name: &self.target,
            }
        }
    }
}

/// An ordered sequence of turns executed before the round cursor advances.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Round {
    turns: Vec<Turn>,
}

impl Round {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl From<Vec<Turn>> for Round {
    fn from(turns: Vec<Turn>) -> Self {
        Self::new(turns)
    }
}

impl FromIterator<Turn> for Round {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
