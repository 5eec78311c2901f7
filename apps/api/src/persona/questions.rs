//! Survey generation: one fixed-prompt model call that produces the
//! five-question traveler questionnaire.

use serde::{Deserialize, Serialize};

use crate::errors::{stage, WorkflowError};
use crate::llm_client::TextGenerator;
use crate::persona::prompts::QUESTION_PROMPT;
use crate::persona::steps::Workflow;

/// One multiple-choice question. Four options by prompt contract; the count
/// is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
}

/// The survey returned by `/generate_question`. Five questions by convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<GeneratedQuestion>,
}

/// Builds the traveler survey with a single model call.
pub async fn generate_questions(llm: &dyn TextGenerator) -> Result<QuestionSet, WorkflowError> {
    let mut wf = Workflow::new(llm, stage::QUESTION_GENERATION);
    wf.complete_json(QUESTION_PROMPT).await
}
