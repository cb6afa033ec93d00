//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving port,
//! so they stay testable without a record store.

use std::sync::Arc;

use crate::domain::ports::AccountDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountDirectory>,
}

impl HttpState {
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountDirectory>) -> Self {
        Self { accounts }
    }
}
