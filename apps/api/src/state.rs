use std::sync::Arc;

use crate::harvest::SiteHarvester;
use crate::llm_client::CompletionBackend;
use crate::resume::ResumeSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Collaborators are trait objects so tests can substitute them.
#[derive(Clone)]
pub struct AppState {
    pub resume: Arc<dyn ResumeSource>,
    pub harvester: Arc<dyn SiteHarvester>,
    pub llm: Arc<dyn CompletionBackend>,
}
