use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use reviews::{dataset, LexiconScorer, ReviewStore, SentimentScorer};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Review store (shared across requests)
    pub store: Arc<ReviewStore>,

    /// Sentiment scorer used by the read path
    pub scorer: Arc<dyn SentimentScorer>,
}

impl ServerState {
    /// Assemble state from already-built parts.
    pub fn new(
        config: ServerConfig,
        store: ReviewStore,
        scorer: Arc<dyn SentimentScorer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            scorer,
        }
    }

    /// Load the configured dataset and wire the default lexicon scorer.
    pub fn load(config: ServerConfig) -> ServerResult<Self> {
        let records = dataset::load_csv(&config.dataset_path).map_err(|e| {
            ServerError::Config(format!(
                "cannot load dataset {}: {e}",
                config.dataset_path.display()
            ))
        })?;
        let store = ReviewStore::from_reviews(records);
        tracing::info!(reviews = store.len(), "review store initialized");

        Ok(Self::new(config, store, Arc::new(LexiconScorer::new())))
    }
}
