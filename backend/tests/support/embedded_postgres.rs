//! Embedded PostgreSQL provisioning for integration tests.
//!
//! Every suite shares one cluster per test binary. Each test gets its own
//! temporary database with the service migrations applied, so tests never
//! observe each other's rows.

use std::time::Duration;

use accounts::outbound::persistence::run_migrations;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= SHARED_CLUSTER_RETRIES => {
                return Err(format!("shared cluster: {error:?}"));
            }
            Err(_) => {
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Create a fresh migrated database on the shared cluster.
///
/// The returned handle drops the database when it goes out of scope.
pub fn provision_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster()?;
    let name = format!("test_{}", uuid::Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(name.as_str())
        .map_err(|error| format!("create temporary database: {error:?}"))?;
    let url = database.url().to_string();
    run_migrations(&url).map_err(|error| format!("migrate: {error}"))?;
    Ok(database)
}
