//! Test doubles shared by the workflow, handler, and step tests.
//!
//! `ScriptedGenerator` hands out canned replies one per call and panics when
//! the script runs dry, which doubles as the no-silent-retry check: a
//! workflow that calls the model more often than its step count fails its
//! test immediately.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{GenerationError, TextGenerator};
use crate::models::mbti::TraitRow;
use crate::store::{StoreError, TraitStore};

/// A scripted model. Replies are consumed in order; prompts are recorded
/// for assertions.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// All-success script.
    pub fn with_replies(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok((*r).to_string())).collect())
    }

    /// A script whose single call fails at the network layer.
    pub fn failing_once() -> Self {
        Self::new(vec![Err(api_error())])
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// The prompt passed to the i-th call.
    pub fn prompt(&self, i: usize) -> String {
        self.prompts.lock().unwrap()[i].clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedGenerator ran out of scripted replies")
    }
}

/// A generation failure for scripts that need one.
pub fn api_error() -> GenerationError {
    GenerationError::Api {
        status: 503,
        message: "upstream unavailable".to_string(),
    }
}

/// In-memory trait store.
pub struct MemoryTraitStore {
    traits: Vec<TraitRow>,
    tags: Vec<String>,
    fail: bool,
    fail_tags: bool,
}

impl MemoryTraitStore {
    pub fn new(traits: Vec<TraitRow>, tags: Vec<String>) -> Self {
        Self {
            traits,
            tags,
            fail: false,
            fail_tags: false,
        }
    }

    pub fn with_traits(traits: Vec<TraitRow>) -> Self {
        Self::new(traits, Vec::new())
    }

    pub fn with_tags(tags: Vec<String>) -> Self {
        Self::new(Vec::new(), tags)
    }

    /// A store whose every query fails, for envelope tests.
    pub fn failing() -> Self {
        Self {
            traits: Vec::new(),
            tags: Vec::new(),
            fail: true,
            fail_tags: false,
        }
    }

    /// A store that serves trait rows but fails the tag-vocabulary query,
    /// for mid-chain failure tests.
    pub fn failing_tags(traits: Vec<TraitRow>) -> Self {
        Self {
            traits,
            tags: Vec::new(),
            fail: false,
            fail_tags: true,
        }
    }
}

#[async_trait]
impl TraitStore for MemoryTraitStore {
    async fn fetch_trait(&self, code: &str) -> Result<Option<TraitRow>, StoreError> {
        if self.fail {
            return Err(sqlx::Error::PoolClosed.into());
        }
        Ok(self.traits.iter().find(|t| t.mbti_type == code).cloned())
    }

    async fn fetch_all_tags(&self) -> Result<Vec<String>, StoreError> {
        if self.fail || self.fail_tags {
            return Err(sqlx::Error::PoolClosed.into());
        }
        Ok(self.tags.clone())
    }
}

/// A store row for tests.
pub fn trait_row(code: &str, name: &str, description: &str) -> TraitRow {
    TraitRow {
        mbti_type: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Fifty tags, the production vocabulary size.
pub fn tag_vocabulary() -> Vec<String> {
    let curated = [
        "#힐링여행",
        "#계획없이떠나기",
        "#감성사진",
        "#맛집투어",
        "#자연속으로",
        "#혼자여행",
        "#가족여행",
        "#바다뷰",
        "#한옥스테이",
        "#야경명소",
    ];
    let mut tags: Vec<String> = curated.iter().map(|t| (*t).to_string()).collect();
    for n in 11..=50 {
        tags.push(format!("#국내여행{n:02}"));
    }
    tags
}
