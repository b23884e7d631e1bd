use axum::Router;
use std::sync::Arc;

use scoreboard::{build_router, AppState, SessionService, SessionStore};

use super::mocks::CountingStore;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub service: Arc<SessionService>,
    /// None when the builder was given another store
    pub store: Option<Arc<CountingStore>>,
}

impl TestSetup {
    pub fn counting_store(&self) -> &CountingStore {
        self.store
            .as_deref()
            .expect("setup was built with an overridden store")
    }
}

pub struct TestSetupBuilder {
    store: Option<Arc<dyn SessionStore>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Replaces the counting in-memory store, e.g. with a failing one
    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> TestSetup {
        let (store, counting) = match self.store {
            Some(store) => (store, None),
            None => {
                let counting = Arc::new(CountingStore::new());
                (counting.clone() as Arc<dyn SessionStore>, Some(counting))
            }
        };

        let service = Arc::new(SessionService::new(store));
        let app = build_router(AppState::new(service.clone()));

        TestSetup {
            app,
            service,
            store: counting,
        }
    }
}
