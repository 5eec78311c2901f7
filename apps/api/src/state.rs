use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::TraitStore;
use crate::taxonomy::TravelTrait;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable after startup; requests share it read-only.
#[derive(Clone)]
pub struct AppState {
    /// Generative-model seam. Production: Gemini. Tests: scripted fake.
    pub llm: Arc<dyn TextGenerator>,
    /// Trait store gateway. Production: per-call MySQL connections.
    pub store: Arc<dyn TraitStore>,
    /// Static trait taxonomy, loaded once at startup. No workflow consumes
    /// it yet; the classification catalog lives in the prompt text.
    #[allow(dead_code)]
    pub taxonomy: Arc<Vec<TravelTrait>>,
}
