//! Identity store behaviour against a real SQLite file: registration,
//! duplicate handling, and credential verification.

mod support;

use storefront_backend::domain::ports::IdentityStore;
use storefront_backend::domain::{ErrorCode, LoginCredentials, Registration};
use storefront_backend::outbound::persistence::DieselIdentityStore;

fn store(db: &support::TestDb) -> DieselIdentityStore {
    DieselIdentityStore::new(db.pool.clone(), support::test_hasher())
}

fn registration(username: &str, email: &str, password: &str) -> Registration {
    Registration::try_from_parts(username, email, password).expect("valid registration")
}

fn credentials(email: &str, password: &str) -> LoginCredentials {
    LoginCredentials::try_from_parts(email, password).expect("valid credentials")
}

#[tokio::test]
async fn register_then_authenticate_round_trips() {
    let db = support::test_db();
    let store = store(&db);

    let user_id = store
        .register(&registration("alice", "alice@example.com", "pw123"))
        .await
        .expect("registration succeeds");

    let summary = store
        .authenticate(&credentials("alice@example.com", "pw123"))
        .await
        .expect("authentication succeeds");

    assert_eq!(summary.id, user_id);
    assert_eq!(summary.username, "alice");
    assert_eq!(summary.email, "alice@example.com");
}

#[tokio::test]
async fn plaintext_password_is_never_stored() {
    let db = support::test_db();
    let store = store(&db);

    store
        .register(&registration("alice", "alice@example.com", "pw123"))
        .await
        .expect("registration succeeds");

    let stored = support::stored_password(&db.pool, "alice@example.com");
    assert_ne!(stored, "pw123");
    assert!(stored.starts_with("$2"));
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_first_row_unaffected() {
    let db = support::test_db();
    let store = store(&db);

    store
        .register(&registration("alice", "alice@example.com", "pw123"))
        .await
        .expect("first registration succeeds");

    let err = store
        .register(&registration("alice2", "alice@example.com", "other"))
        .await
        .expect_err("second registration must fail");
    assert_eq!(err.code(), ErrorCode::DuplicateIdentity);

    // The original account still authenticates with its original password.
    let summary = store
        .authenticate(&credentials("alice@example.com", "pw123"))
        .await
        .expect("original account intact");
    assert_eq!(summary.username, "alice");
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let db = support::test_db();
    let store = store(&db);

    store
        .register(&registration("alice", "alice@example.com", "pw123"))
        .await
        .expect("first registration succeeds");

    let err = store
        .register(&registration("alice", "other@example.com", "pw123"))
        .await
        .expect_err("duplicate username must fail");
    assert_eq!(err.code(), ErrorCode::DuplicateIdentity);
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let db = support::test_db();
    let store = store(&db);

    store
        .register(&registration("alice", "alice@example.com", "pw123"))
        .await
        .expect("registration succeeds");

    let err = store
        .authenticate(&credentials("alice@example.com", "wrong"))
        .await
        .expect_err("wrong password must fail");
    assert_eq!(err.code(), ErrorCode::InvalidCredentials);
}

#[tokio::test]
async fn unknown_email_is_not_found() {
    let db = support::test_db();
    let store = store(&db);

    let err = store
        .authenticate(&credentials("nobody@example.com", "pw123"))
        .await
        .expect_err("unknown email must fail");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
