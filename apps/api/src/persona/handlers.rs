//! Axum route handlers for the survey and recommendation endpoints.
//!
//! Handlers return `Result<Json<T>, WorkflowError>`; the error's
//! `IntoResponse` renders the always-200 envelope, so every workflow outcome
//! reaches the client as a well-formed JSON body.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::WorkflowError;
use crate::persona::classify::{classify_traveler, PersonalityClassification};
use crate::persona::pipeline::{
    analyze_and_recommend, rag_recommend, recommend_tags, FullRecommendation, RagRecommendation,
    TagRecommendation,
};
use crate::persona::questions::{generate_questions, QuestionSet};
use crate::state::AppState;

/// Request body shared by the four answer-driven endpoints. Answer order is
/// meaningful; it maps positionally to the generated questions.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub answers: Vec<String>,
}

/// GET /generate_question
pub async fn handle_generate_question(
    State(state): State<AppState>,
) -> Result<Json<QuestionSet>, WorkflowError> {
    let questions = generate_questions(state.llm.as_ref()).await?;
    Ok(Json(questions))
}

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<PersonalityClassification>, WorkflowError> {
    let classification = classify_traveler(state.llm.as_ref(), &request.answers).await?;
    Ok(Json(classification))
}

/// POST /rag_recommend
pub async fn handle_rag_recommend(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<RagRecommendation>, WorkflowError> {
    let result = rag_recommend(state.llm.as_ref(), state.store.as_ref(), &request.answers).await?;
    Ok(Json(result))
}

/// POST /recommend_tags
pub async fn handle_recommend_tags(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<TagRecommendation>, WorkflowError> {
    let result =
        recommend_tags(state.llm.as_ref(), state.store.as_ref(), &request.answers).await?;
    Ok(Json(result))
}

/// POST /analyze_and_recommend
pub async fn handle_analyze_and_recommend(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<FullRecommendation>, WorkflowError> {
    let result =
        analyze_and_recommend(state.llm.as_ref(), state.store.as_ref(), &request.answers).await?;
    Ok(Json(result))
}
