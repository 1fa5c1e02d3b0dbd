//! Service wiring for the API process.

use std::sync::Arc;

use provet_ai::BrandFitAnalyzer;
use provet_pipeline::SubmissionOrchestrator;
use provet_store::InMemoryProductStore;

/// Shared application services handed to every handler.
#[derive(Debug)]
pub struct AppServices {
    pub store: Arc<InMemoryProductStore>,
    pub orchestrator: SubmissionOrchestrator<InMemoryProductStore>,
}

/// Wire the store, analyzer and orchestrator together.
///
/// The scoring credential is injected here, at the composition root; nothing
/// below this layer reads the environment.
pub fn build_services(gemini_api_key: Option<String>) -> AppServices {
    let store = Arc::new(InMemoryProductStore::new());
    let analyzer = BrandFitAnalyzer::from_gemini_key(gemini_api_key);
    let orchestrator = SubmissionOrchestrator::new(store.clone(), analyzer);

    AppServices {
        store,
        orchestrator,
    }
}
