//! Traveler classification: maps survey answers onto one of the sixteen
//! catalog categories with a single model call.

use serde::{Deserialize, Serialize};

use crate::errors::{stage, WorkflowError};
use crate::llm_client::TextGenerator;
use crate::persona::prompts::classify_prompt;
use crate::persona::steps::Workflow;

/// The classification returned by `/analyze`: a catalog code plus the
/// model-written label, description, and place suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityClassification {
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    pub description: String,
    pub recommended_places: Vec<String>,
}

/// Classifies the traveler from their answers.
pub async fn classify_traveler(
    llm: &dyn TextGenerator,
    answers: &[String],
) -> Result<PersonalityClassification, WorkflowError> {
    let mut wf = Workflow::new(llm, stage::CLASSIFICATION);
    wf.complete_json(&classify_prompt(answers)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGenerator;

    const CLASSIFY_REPLY: &str = r#"{
        "type": "A6",
        "name": "힐링 여행자",
        "description": "조용한 곳에서 재충전하는 여행을 좋아합니다.",
        "recommended_places": ["강릉", "남해", "평창"]
    }"#;

    fn answers() -> Vec<String> {
        vec!["느긋한 여행".to_string(), "자연".to_string()]
    }

    #[tokio::test]
    async fn test_classifies_from_bare_json_reply() {
        let llm = ScriptedGenerator::with_replies(&[CLASSIFY_REPLY]);

        let classification = classify_traveler(&llm, &answers()).await.unwrap();
        assert_eq!(classification.category, "A6");
        assert_eq!(classification.name, "힐링 여행자");
        assert_eq!(classification.recommended_places.len(), 3);
    }

    #[tokio::test]
    async fn test_prompt_embeds_answers_and_catalog() {
        let llm = ScriptedGenerator::with_replies(&[CLASSIFY_REPLY]);

        classify_traveler(&llm, &answers()).await.unwrap();
        let prompt = llm.prompt(0);
        assert!(prompt.contains("느긋한 여행"));
        assert!(prompt.contains("성향 목록:"));
    }

    #[tokio::test]
    async fn test_classification_serializes_type_key() {
        let llm = ScriptedGenerator::with_replies(&[CLASSIFY_REPLY]);

        let classification = classify_traveler(&llm, &answers()).await.unwrap();
        let value = serde_json::to_value(&classification).unwrap();
        // The wire key is `type`, not the Rust field name
        assert_eq!(value["type"], "A6");
        assert!(value.get("category").is_none());
    }

    #[tokio::test]
    async fn test_failure_reports_classification_stage() {
        let llm = ScriptedGenerator::failing_once();

        let err = classify_traveler(&llm, &answers()).await.unwrap_err();
        assert_eq!(err.to_body().error, "classification failed");
    }
}
