//! Participant construction from biography attributes or documents.

use wargame_core::{
    Biography, BiographySource, ConfigurationError, DocumentStore, Participant,
};

use crate::api::Result;
use crate::oracle::OracleManager;

const DISPOSITION: &str = "What is this individual's disposition? Answer concisely.";
const EMPATHY: &str = "What is the empathy level of this individual? Answer concisely.";
const EXERCISE_OBJECTIVES: &str =
    "What are this individual's exercise objectives? Answer concisely.";
const STRATEGIC_OBJECTIVES: &str =
    "What are this individual's strategic objectives? Answer concisely.";
const OVERALL_OBJECTIVE: &str = "What is the overall objective of this individual?";

/// Builds participants and stores their biographies.
#[derive(Clone)]
pub struct ParticipantFactory {
    oracles: OracleManager,
}

impl ParticipantFactory {
    pub fn new(oracles: OracleManager) -> Self {
        Self { oracles }
    }

    /// Builds a participant from `source`.
    ///
    /// Attribute biographies must carry a deployment directive; their rendered
    /// text is written to `store`. Document biographies keep every supplied
    /// override and ask the profile oracle for the rest.
    pub fn build(
        &self,
        source: BiographySource,
        is_human: bool,
        store: &mut dyn DocumentStore,
    ) -> Result<Participant> {
        let (biography, document) = match source {
            BiographySource::Attributes(biography) => {
                let has_directive = biography
                    .deployment_directive
                    .as_deref()
                    .is_some_and(|directive| !directive.trim().is_empty());
                if !has_directive {
                    return Err(ConfigurationError::MissingBiography.into());
                }
                let document = store.put(&biography.render())?;
                (biography, document)
            }
            BiographySource::Document {
                document,
                overrides,
            } => {
                let text = store.get(&document)?;
                (self.complete_from_document(overrides, &text)?, document)
            }
        };

        let participant = Participant::new(&biography, is_human).with_bio_document(document);
        tracing::debug!(
            target: "runtime::agent",
            identity = participant.identity(),
            is_human,
            "Participant created"
        );
        Ok(participant)
    }

    fn complete_from_document(&self, mut bio: Biography, text: &str) -> Result<Biography> {
        if bio.disposition.is_none() {
            bio.disposition = Some(self.ask(DISPOSITION, text)?);
        }
        if bio.empathy.is_none() {
            bio.empathy = Some(self.ask(EMPATHY, text)?);
        }
        if bio.exercise_objectives.is_empty() {
            bio.exercise_objectives = split_list(&self.ask(EXERCISE_OBJECTIVES, text)?);
        }
        if bio.strategic_objectives.is_empty() {
            bio.strategic_objectives = split_list(&self.ask(STRATEGIC_OBJECTIVES, text)?);
        }
        let needs_directive = bio
            .deployment_directive
            .as_deref()
            .is_none_or(|directive| directive.trim().is_empty());
        if needs_directive {
            bio.deployment_directive = Some(self.ask(OVERALL_OBJECTIVE, text)?);
        }
        Ok(bio)
    }

    fn ask(&self, question: &str, document: &str) -> Result<String> {
        Ok(self
            .oracles
            .profile()
            .answer(question, document)?
            .trim()
            .to_owned())
    }
}

fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
