//! Stub collaborators for handler and pipeline tests.

use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::harvest::{HarvestedPage, SiteHarvester};
use crate::llm_client::{CompletionBackend, LlmError};
use crate::resume::ResumeSource;
use crate::state::AppState;

/// Résumé source returning fixed text, counting invocations.
pub struct FixedResume {
    text: String,
    pub call_count: AtomicUsize,
}

impl FixedResume {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            call_count: AtomicUsize::new(0),
        }
    }
}

impl ResumeSource for FixedResume {
    fn resume_text(&self) -> String {
        self.call_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.text.clone()
    }
}

/// Harvester returning fixed pages, counting invocations.
pub struct FixedHarvester {
    pages: Vec<HarvestedPage>,
    pub call_count: AtomicUsize,
}

impl FixedHarvester {
    pub fn new(pages: Vec<HarvestedPage>) -> Self {
        Self {
            pages,
            call_count: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SiteHarvester for FixedHarvester {
    async fn harvest(&self) -> Vec<HarvestedPage> {
        self.call_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.pages.clone()
    }
}

/// Completion backend returning a fixed reply, recording every (system,
/// prompt) pair it receives.
pub struct RecordingLlm {
    reply: String,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl RecordingLlm {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionBackend for RecordingLlm {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        Ok(self.reply.clone())
    }
}

/// Completion backend that always fails.
pub struct FailingLlm;

#[async_trait]
impl CompletionBackend for FailingLlm {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Malformed("stubbed failure"))
    }
}

pub fn state_with(
    resume: Arc<FixedResume>,
    harvester: Arc<FixedHarvester>,
    llm: Arc<dyn CompletionBackend>,
) -> AppState {
    AppState {
        resume,
        harvester,
        llm,
    }
}
