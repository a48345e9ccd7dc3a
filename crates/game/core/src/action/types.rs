//! Core action types.

use std::fmt;

use crate::action::ResourceChange;

/// A structured action returned by the umpire, an AI participant, or a human.
///
/// Field names follow the response contract described by [`ActionShape`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionResponse {
    /// The thing being done.
    pub action: String,
    /// Why it is being done.
    pub rationale: String,
    /// Participants (or `"Umpire"`) targeted by the action.
    pub targets: Vec<String>,
    /// Optional resource adjustments the action claims.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Vec::is_empty")
    )]
    pub resources: Vec<ResourceChange>,
}

impl ActionResponse {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = targets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_resources(mut self, resources: Vec<ResourceChange>) -> Self {
        self.resources = resources;
        self
    }
}

impl fmt::Display for ActionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ACTION: {}", self.action)?;
        if !self.rationale.is_empty() {
            write!(f, " | RATIONALE: {}", self.rationale)?;
        }
        if !self.targets.is_empty() {
            write!(f, " | TARGETS: {}", self.targets.join(", "))?;
        }
        Ok(())
    }
}

/// Response contract handed to the action oracle and shown to human players.
///
/// The contract is fixed at compile time; producers must return an
/// [`ActionResponse`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionShape;

impl ActionShape {
    /// JSON template describing the expected response fields.
    pub const TEMPLATE: &'static str = concat!(
        r#"{"action": "The 'thing' you are doing/performing", "#,
        r#""rationale": "The reason why you are doing the requested action", "#,
        r#""targets": ["Players targeted by this action. Can be 'Umpire' for umpire/game master."]}"#
    );

    pub const fn template(&self) -> &'static str {
        Self::TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_empty_fields() {
        let action = ActionResponse::new("hold the bridge");
        assert_eq!(action.to_string(), "ACTION: hold the bridge");

        let action = action
            .with_rationale("it is the only crossing")
            .with_targets(["Red"]);
        assert_eq!(
            action.to_string(),
            "ACTION: hold the bridge | RATIONALE: it is the only crossing | TARGETS: Red"
        );
    }
}
