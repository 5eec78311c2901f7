use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::llm_client::GenerationError;
use crate::store::StoreError;

/// Public stage labels, one per endpoint. A failing workflow reports its
/// label in the `error` field, so clients can tell which pipeline broke
/// without parsing `details`.
pub mod stage {
    pub const QUESTION_GENERATION: &str = "question generation failed";
    pub const CLASSIFICATION: &str = "classification failed";
    pub const RAG_RECOMMENDATION: &str = "RAG recommendation failed";
    pub const TAG_RECOMMENDATION: &str = "tag recommendation failed";
    pub const FULL_RECOMMENDATION: &str = "full recommendation failed";
}

/// The component that broke a workflow step.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Workflow-level failure.
/// Implements `IntoResponse` so handlers can return `Result<Json<T>, WorkflowError>`.
///
/// Every variant renders as HTTP 200 with an `error` field in the JSON body.
/// Existing clients branch on that envelope, not on the status code, so the
/// 200 is part of the wire contract.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A step failed mid-pipeline. Carries the public stage label and the
    /// raw text of the furthest completed model call, when there was one.
    #[error("{stage}")]
    Step {
        stage: &'static str,
        #[source]
        source: StepError,
        raw_response: Option<String>,
    },

    /// The pipeline ran fine but the predicted code has no store row.
    /// Rendered without `details` or `raw_response`.
    #[error("no trait record for type {0}")]
    TraitNotFound(String),
}

/// JSON failure envelope. Optional fields are omitted when absent, never
/// serialized as null.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl WorkflowError {
    /// Renders the envelope body. Split out of `into_response` so tests can
    /// assert on fields without going through HTTP.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            WorkflowError::Step {
                stage,
                source,
                raw_response,
            } => ErrorBody {
                error: (*stage).to_string(),
                details: Some(source.to_string()),
                raw_response: raw_response.clone(),
            },
            WorkflowError::TraitNotFound(code) => ErrorBody {
                error: format!("no trait record for type {code}"),
                details: None,
                raw_response: None,
            },
        }
    }
}

impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        match &self {
            WorkflowError::Step { stage, source, .. } => {
                tracing::error!("{stage}: {source}");
            }
            WorkflowError::TraitNotFound(code) => {
                tracing::warn!("predicted type {code} has no trait record");
            }
        }

        (StatusCode::OK, Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_error(raw: Option<&str>) -> WorkflowError {
        WorkflowError::Step {
            stage: stage::CLASSIFICATION,
            source: StepError::Generation(GenerationError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            }),
            raw_response: raw.map(String::from),
        }
    }

    #[test]
    fn test_step_body_carries_stage_details_and_raw() {
        let body = step_error(Some("raw model text")).to_body();
        assert_eq!(body.error, "classification failed");
        assert!(body.details.unwrap().contains("429"));
        assert_eq!(body.raw_response.unwrap(), "raw model text");
    }

    #[test]
    fn test_absent_fields_are_omitted_not_null() {
        let value = serde_json::to_value(step_error(None).to_body()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("error"));
        assert!(object.contains_key("details"));
        assert!(!object.contains_key("raw_response"));
    }

    #[test]
    fn test_trait_not_found_body_names_the_code() {
        let body = WorkflowError::TraitNotFound("ZZZZ".to_string()).to_body();
        assert!(body.error.contains("ZZZZ"));
        assert!(body.details.is_none());
        assert!(body.raw_response.is_none());
    }

    #[test]
    fn test_every_failure_renders_http_200() {
        let step = step_error(Some("raw")).into_response();
        assert_eq!(step.status(), StatusCode::OK);

        let not_found = WorkflowError::TraitNotFound("INTJ".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::OK);
    }

    #[test]
    fn test_extraction_step_details_mention_the_parse_failure() {
        let extraction = crate::extract::extract::<crate::persona::steps::MbtiPrediction>(
            "이건 JSON이 아닙니다",
        )
        .unwrap_err();
        let err = WorkflowError::Step {
            stage: stage::RAG_RECOMMENDATION,
            source: StepError::Extraction(extraction),
            raw_response: Some("이건 JSON이 아닙니다".to_string()),
        };
        let body = err.to_body();
        assert_eq!(body.error, "RAG recommendation failed");
        assert!(body.details.unwrap().contains("malformed model reply"));
    }
}
