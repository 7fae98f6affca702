use std::sync::Arc;

use crate::catalog::{InMemoryCatalog, ProductCatalog};
use crate::users::{FakePasswordHasher, PasswordHasher};

/// Collaborators shared by all handlers; read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ProductCatalog>,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProductCatalog>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { catalog, hasher }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryCatalog::seeded()),
            Arc::new(FakePasswordHasher),
        )
    }
}
