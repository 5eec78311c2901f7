//! The recommendation workflows: RAG message, tag selection, and the full
//! analyze-and-recommend chain.
//!
//! Steps run strictly sequentially; each prompt is built from the previous
//! step's extracted result, so nothing is started speculatively. All three
//! share the MBTI-prediction, trait-lookup, and tag-selection steps in
//! `steps.rs`; this module owns the composition and the response shapes.

use serde::Serialize;
use tracing::info;

use crate::errors::{stage, WorkflowError};
use crate::llm_client::TextGenerator;
use crate::models::mbti::TraitRow;
use crate::persona::prompts;
use crate::persona::steps::Workflow;
use crate::store::TraitStore;

/// `/rag_recommend` response: the predicted code, its store row, and an
/// emotional free-text message.
#[derive(Debug, Clone, Serialize)]
pub struct RagRecommendation {
    pub mbti: String,
    #[serde(rename = "trait")]
    pub trait_row: TraitRow,
    pub recommendation: String,
}

/// `/recommend_tags` response.
#[derive(Debug, Clone, Serialize)]
pub struct TagRecommendation {
    pub tags: Vec<String>,
}

/// `/analyze_and_recommend` response: everything the service can say about
/// one traveler in a single object.
#[derive(Debug, Clone, Serialize)]
pub struct FullRecommendation {
    pub mbti: String,
    #[serde(rename = "trait")]
    pub trait_row: TraitRow,
    pub recommendation: String,
    pub tags: Vec<String>,
    pub recommended_regions: Vec<String>,
}

/// Predict MBTI → look up its trait row → write an emotional message.
///
/// The message is returned exactly as the model wrote it, with no
/// extraction and no trimming.
pub async fn rag_recommend(
    llm: &dyn TextGenerator,
    store: &dyn TraitStore,
    answers: &[String],
) -> Result<RagRecommendation, WorkflowError> {
    let mut wf = Workflow::new(llm, stage::RAG_RECOMMENDATION);

    let predicted = wf.predict_mbti(answers).await?;
    info!("Predicted MBTI {} from {} answers", predicted.mbti, answers.len());

    let trait_row = wf.lookup_trait(store, &predicted.mbti).await?;
    let recommendation = wf.complete(&prompts::emotional_prompt(&trait_row)).await?;

    Ok(RagRecommendation {
        mbti: predicted.mbti,
        trait_row,
        recommendation,
    })
}

/// Fetch the 50-tag vocabulary and let the model pick ten for this traveler.
pub async fn recommend_tags(
    llm: &dyn TextGenerator,
    store: &dyn TraitStore,
    answers: &[String],
) -> Result<TagRecommendation, WorkflowError> {
    let mut wf = Workflow::new(llm, stage::TAG_RECOMMENDATION);
    let tags = wf.select_tags(store, answers).await?;
    Ok(TagRecommendation { tags })
}

/// The full chain: MBTI prediction → trait lookup → descriptive analysis →
/// tag selection → region shortlist.
///
/// The analysis step asks for an informational register (the emotional one
/// belongs to `/rag_recommend`); its reply is trimmed before assembly.
pub async fn analyze_and_recommend(
    llm: &dyn TextGenerator,
    store: &dyn TraitStore,
    answers: &[String],
) -> Result<FullRecommendation, WorkflowError> {
    let mut wf = Workflow::new(llm, stage::FULL_RECOMMENDATION);

    let predicted = wf.predict_mbti(answers).await?;
    info!("Predicted MBTI {} from {} answers", predicted.mbti, answers.len());

    let trait_row = wf.lookup_trait(store, &predicted.mbti).await?;
    let analysis = wf.complete(&prompts::analysis_prompt(&trait_row)).await?;
    let tags = wf.select_tags(store, answers).await?;
    let region_line = wf.complete(&prompts::region_prompt(&trait_row)).await?;

    Ok(FullRecommendation {
        mbti: predicted.mbti,
        trait_row,
        recommendation: analysis.trim().to_string(),
        tags,
        recommended_regions: parse_regions(&region_line),
    })
}

/// Splits the one-line region reply on commas, trimming each city name and
/// keeping at most the first three. A shorter reply yields a shorter list,
/// not an error.
fn parse_regions(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .take(3)
        .map(|city| city.trim().to_string())
        .collect()
}
