use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `mbti_traits`, keyed by the MBTI code the model predicts.
/// `name` and `description` are the store-curated Korean texts; the whole
/// row is passed through to clients under the `trait` key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TraitRow {
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub mbti_type: String,
    pub name: String,
    pub description: String,
}
