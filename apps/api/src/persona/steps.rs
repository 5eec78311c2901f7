//! Shared step plumbing for the survey workflows.
//!
//! A workflow is a fixed sequence of model calls, extractions, and store
//! lookups; the first failing step short-circuits the rest. [`Workflow`]
//! tracks the raw text of the furthest completed model call so the failure
//! envelope can show operators what the model actually said.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{StepError, WorkflowError};
use crate::extract::extract;
use crate::llm_client::TextGenerator;
use crate::models::mbti::TraitRow;
use crate::persona::prompts;
use crate::store::TraitStore;

/// The model's MBTI guess, e.g. `{"mbti": "ENFP"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MbtiPrediction {
    pub mbti: String,
}

/// Declared shape of the tag-selection reply.
#[derive(Debug, Deserialize)]
struct TagSelection {
    tags: Vec<String>,
}

/// Step executor for one workflow run. Owns nothing but the stage label and
/// the most recent completed reply.
pub struct Workflow<'a> {
    llm: &'a dyn TextGenerator,
    stage: &'static str,
    last_raw: Option<String>,
}

impl<'a> Workflow<'a> {
    pub fn new(llm: &'a dyn TextGenerator, stage: &'static str) -> Self {
        Self {
            llm,
            stage,
            last_raw: None,
        }
    }

    /// Runs one model call, recording the reply before handing it back.
    pub async fn complete(&mut self, prompt: &str) -> Result<String, WorkflowError> {
        match self.llm.complete(prompt).await {
            Ok(text) => {
                self.last_raw = Some(text.clone());
                Ok(text)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Model call followed by structured extraction into `T`.
    pub async fn complete_json<T: DeserializeOwned>(
        &mut self,
        prompt: &str,
    ) -> Result<T, WorkflowError> {
        let text = self.complete(prompt).await?;
        extract(&text).map_err(|e| self.fail(e))
    }

    /// Looks up the trait row for a predicted code. An absent row is the
    /// domain outcome [`WorkflowError::TraitNotFound`], not a step failure.
    pub async fn lookup_trait(
        &mut self,
        store: &dyn TraitStore,
        code: &str,
    ) -> Result<TraitRow, WorkflowError> {
        match store.fetch_trait(code).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(WorkflowError::TraitNotFound(code.to_string())),
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Predicts the traveler's MBTI code from their answers. Opening step of
    /// the RAG and full recommendation workflows.
    pub async fn predict_mbti(
        &mut self,
        answers: &[String],
    ) -> Result<MbtiPrediction, WorkflowError> {
        self.complete_json(&prompts::mbti_prompt(answers)).await
    }

    /// Fetches the tag vocabulary and asks the model to pick ten for this
    /// traveler. Shared by the tag and full recommendation workflows.
    pub async fn select_tags(
        &mut self,
        store: &dyn TraitStore,
        answers: &[String],
    ) -> Result<Vec<String>, WorkflowError> {
        let vocabulary = match store.fetch_all_tags().await {
            Ok(tags) => tags,
            Err(e) => return Err(self.fail(e)),
        };
        let selection: TagSelection = self
            .complete_json(&prompts::tag_prompt(answers, &vocabulary))
            .await?;
        Ok(selection.tags)
    }

    /// Wraps a component failure into this workflow's envelope, attaching
    /// the furthest completed reply.
    fn fail(&mut self, source: impl Into<StepError>) -> WorkflowError {
        WorkflowError::Step {
            stage: self.stage,
            source: source.into(),
            raw_response: self.last_raw.take(),
        }
    }
}
