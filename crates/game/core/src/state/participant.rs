//! Participants and the biographies that define them.
//!
//! A participant's identity is the content hash of its rendered biography,
//! so two participants with identical biographies share an identity.
//! Identity never changes after construction; the only
//! mutation is appending accepted actions to the history.

use std::collections::BTreeMap;

use crate::action::ActionResponse;
use crate::env::DocumentId;
use crate::hash::content_hash;

/// Character attributes a biography is rendered from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Biography {
    pub deployment_directive: Option<String>,
    pub factions: Vec<String>,
    pub beliefs: Vec<String>,
    pub disposition: Option<String>,
    pub empathy: Option<String>,
    pub exercise_objectives: Vec<String>,
    pub strategic_objectives: Vec<String>,
    pub notes: BTreeMap<String, String>,
}

impl Biography {
    pub fn with_directive(deployment_directive: impl Into<String>) -> Self {
        Self {
            deployment_directive: Some(deployment_directive.into()),
            ..Self::default()
        }
    }

    /// Renders the biography text, one `Label: value` line per present attribute.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();

        if let Some(directive) = non_empty(&self.deployment_directive) {
            parts.push(format!("Deployment Directive: {directive}"));
        }
        if !self.factions.is_empty() {
            parts.push(format!("Factions: {}", self.factions.join(", ")));
        }
        if !self.beliefs.is_empty() {
            parts.push(format!("Beliefs: {}", self.beliefs.join(", ")));
        }
        if let Some(disposition) = non_empty(&self.disposition) {
            parts.push(format!("Disposition: {disposition}"));
        }
        if let Some(empathy) = non_empty(&self.empathy) {
            parts.push(format!("Empathy: {empathy}"));
        }
        if !self.exercise_objectives.is_empty() {
            parts.push(format!(
                "Exercise Objectives: {}",
                self.exercise_objectives.join(", ")
            ));
        }
        if !self.strategic_objectives.is_empty() {
            parts.push(format!(
                "Strategic Objectives: {}",
                self.strategic_objectives.join(", ")
            ));
        }
        if !self.notes.is_empty() {
            let notes: Vec<String> = self
                .notes
                .iter()
                .map(|(key, value)| format!("  - {key}: {value}"))
                .collect();
            parts.push(format!("Notes:\n{}", notes.join("\n")));
        }

        parts.join("\n")
    }
}

/// Where a participant's biography comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BiographySource {
    /// Explicit attributes; must include a deployment directive.
    Attributes(Biography),
    /// A stored biography document; missing attributes are derived from it.
    Document {
        document: DocumentId,
        /// Attributes supplied alongside the document take precedence.
        overrides: Biography,
    },
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// A human or AI-backed character taking part in the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    identity: String,
    #[cfg_attr(feature = "serde", serde(default))]
    name: Option<String>,
    is_human: bool,
    bio: String,
    #[cfg_attr(feature = "serde", serde(default))]
    bio_document: Option<DocumentId>,
    #[cfg_attr(feature = "serde", serde(default))]
    action_history: Vec<ActionResponse>,
}

impl Participant {
    /// Builds a participant from biography attributes.
    pub fn new(biography: &Biography, is_human: bool) -> Self {
        Self::from_bio_text(biography.render(), is_human)
    }

    /// Builds a participant from already rendered biography text.
    pub fn from_bio_text(bio: impl Into<String>, is_human: bool) -> Self {
        let bio = bio.into();
        Self {
            identity: content_hash(&bio),
            name: None,
            is_human,
            bio,
            bio_document: None,
            action_history: Vec::new(),
        }
    }

    /// Attaches a display name turns may target instead of the identity.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_bio_document(mut self, document: DocumentId) -> Self {
        self.bio_document = Some(document);
        self
    }

    /// Stable content-derived identity (hex SHA-256 of the biography).
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display name when present, identity otherwise.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(&self.identity)
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn bio_document(&self) -> Option<&DocumentId> {
        self.bio_document.as_ref()
    }

    pub fn action_history(&self) -> &[ActionResponse] {
        &self.action_history
    }

    /// True when a turn target names this participant.
    pub fn answers_to(&self, target: &str) -> bool {
        self.identity == target || self.name.as_deref() == Some(target)
    }

    /// Appends an accepted action to the history.
    pub fn record_action(&mut self, action: ActionResponse) {
        self.action_history.push(action);
    }
}
