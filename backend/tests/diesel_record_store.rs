//! Integration tests for `DieselRecordStore` against embedded PostgreSQL.
//!
//! These tests check the record store contract against a real database:
//! constraint names must map to the right duplicate field, credential lookups
//! must match both columns, and removal must only touch the named user.
//! Set `SKIP_TEST_CLUSTER=1` to skip them where no cluster can start.

use accounts::domain::ports::{RecordFilter, RecordStore, RecordStoreError, UniqueField};
use accounts::domain::{LoginCredentials, UserRecord, Username};
use accounts::outbound::persistence::{DbPool, DieselRecordStore, PoolConfig};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{handle_cluster_setup_failure, provision_database};

struct TestContext {
    runtime: Runtime,
    store: DieselRecordStore,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

fn setup_test_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_database()?;
    let config = PoolConfig::new(database.url().to_string())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        store: DieselRecordStore::new(pool),
        _database: database,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_test_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn record(username: &str, phone_number: i64, password: &str) -> UserRecord {
    UserRecord::try_from_stored(username, phone_number, password).expect("valid record")
}

fn by_username(username: &str) -> RecordFilter {
    RecordFilter::Username(Username::parse(username).expect("valid username"))
}

fn by_credentials(username: &str, password: &str) -> RecordFilter {
    RecordFilter::Credentials(
        LoginCredentials::try_from_parts(username, password).expect("valid credentials"),
    )
}

#[rstest]
fn inserted_record_is_found_by_username(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let alice = record("alice", 555_111, "p1");

    ctx.block_on(ctx.store.insert(&alice)).expect("insert");
    let found = ctx
        .block_on(ctx.store.find_one(&by_username("alice")))
        .expect("lookup");

    assert_eq!(found, Some(alice));
    assert_eq!(
        ctx.block_on(ctx.store.find_one(&by_username("bob")))
            .expect("lookup"),
        None
    );
}

#[rstest]
#[case(record("alice", 555_222, "p2"), UniqueField::Username)]
#[case(record("bob", 555_111, "p3"), UniqueField::PhoneNumber)]
fn unique_violations_name_the_field(
    context: Option<TestContext>,
    #[case] clashing: UserRecord,
    #[case] expected: UniqueField,
) {
    let Some(ctx) = context else { return };
    ctx.block_on(ctx.store.insert(&record("alice", 555_111, "p1")))
        .expect("first insert");

    let err = ctx
        .block_on(ctx.store.insert(&clashing))
        .expect_err("duplicate rejected");

    assert!(
        matches!(err, RecordStoreError::Duplicate { field } if field == expected),
        "unexpected error: {err:?}"
    );
    assert_eq!(ctx.block_on(ctx.store.find_all()).expect("list").len(), 1);
}

#[rstest]
#[case("alice", "p1", true)]
#[case("alice", "p2", false)]
#[case("bob", "p1", false)]
fn credentials_must_match_both_columns(
    context: Option<TestContext>,
    #[case] username: &str,
    #[case] password: &str,
    #[case] hit: bool,
) {
    let Some(ctx) = context else { return };
    ctx.block_on(ctx.store.insert(&record("alice", 555_111, "p1")))
        .expect("insert alice");
    ctx.block_on(ctx.store.insert(&record("bob", 555_222, "p2")))
        .expect("insert bob");

    let found = ctx
        .block_on(ctx.store.find_one(&by_credentials(username, password)))
        .expect("lookup");

    assert_eq!(found.is_some(), hit);
    if let Some(found) = found {
        assert_eq!(found.username().as_str(), username);
    }
}

#[rstest]
fn find_all_returns_every_record(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    assert!(ctx.block_on(ctx.store.find_all()).expect("list").is_empty());
    for (name, phone) in [("alice", 1), ("bob", 2), ("carol", 3)] {
        ctx.block_on(ctx.store.insert(&record(name, phone, "pw")))
            .expect("insert");
    }

    let mut names: Vec<String> = ctx
        .block_on(ctx.store.find_all())
        .expect("list")
        .iter()
        .map(|r| r.username().to_string())
        .collect();
    names.sort();

    assert_eq!(names, ["alice", "bob", "carol"]);
}

#[rstest]
fn remove_deletes_only_the_named_user(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let alice = record("alice", 1, "pw");
    ctx.block_on(ctx.store.insert(&alice)).expect("insert alice");
    ctx.block_on(ctx.store.insert(&record("bob", 2, "pw")))
        .expect("insert bob");

    ctx.block_on(ctx.store.remove(&alice)).expect("remove");

    assert_eq!(
        ctx.block_on(ctx.store.find_one(&by_username("alice")))
            .expect("lookup"),
        None
    );
    let remaining = ctx.block_on(ctx.store.find_all()).expect("list");
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining.first().map(|r| r.username().as_str()),
        Some("bob")
    );
}

#[rstest]
fn long_usernames_are_stored(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let name = "a".repeat(300);
    let long = record(&name, 555_111, "p1");

    ctx.block_on(ctx.store.insert(&long)).expect("insert");

    assert_eq!(
        ctx.block_on(ctx.store.find_one(&by_username(&name)))
            .expect("lookup"),
        Some(long)
    );
}
