use std::sync::Arc;

use crate::config::Config;
use crate::enhancement::engine::Enhancer;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ResumeStore>,
    /// Pluggable enhancer. Default: TemplateEnhancer.
    pub enhancer: Arc<dyn Enhancer>,
    pub config: Config,
}
