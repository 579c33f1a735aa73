use std::sync::Arc;

use crate::analysis::{PostingFetcher, ProfilePipeline};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled analysis stages over the read-only lexicon. Built once at startup.
    pub pipeline: Arc<ProfilePipeline>,
    /// Pluggable URL fetcher. Default: HttpPostingFetcher; tests use stubs.
    pub fetcher: Arc<dyn PostingFetcher>,
}
