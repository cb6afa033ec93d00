//! Builders wiring the account directory to a record store.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use accounts::domain::AccountDirectoryService;
use accounts::domain::ports::AccountDirectory;
use accounts::inbound::http::state::HttpState;
use accounts::outbound::memory::InMemoryRecordStore;
use accounts::outbound::persistence::DieselRecordStore;

use super::ServerConfig;

/// Pick the PostgreSQL store when a pool is configured, otherwise keep
/// records in memory.
fn build_account_directory(config: &ServerConfig) -> Arc<dyn AccountDirectory> {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL record store");
            Arc::new(AccountDirectoryService::new(Arc::new(
                DieselRecordStore::new(pool.clone()),
            )))
        }
        None => {
            warn!("no database configured; records are kept in memory and lost on exit");
            Arc::new(AccountDirectoryService::new(Arc::new(
                InMemoryRecordStore::new(),
            )))
        }
    }
}

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_account_directory(config)))
}
