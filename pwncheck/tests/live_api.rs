//! Exercises the real pwnedpasswords range API.
//!
//! Ignored by default; run with `cargo test -p pwncheck -- --ignored`.

use data_encoding::HEXLOWER;
use rand::RngCore;

use pwncheck::{CancellationToken, Checker, Config, Error};

fn checker() -> Checker {
    Checker::new(Config {
        min_password_length: 7,
        breach_limit: 10,
        max_retry_attempts: 3,
        user_agent: "pwncheck integration tests".to_owned(),
        add_padding: true,
        ..Config::default()
    })
    .unwrap()
}

#[tokio::test]
#[ignore = "talks to the live pwnedpasswords API"]
async fn known_breached_password_is_rejected() {
    let checker = checker();
    let cancel = CancellationToken::new();

    let evaluation = checker.evaluate(&cancel, "password").await.unwrap();
    assert!(
        evaluation.breach_count > 10_000,
        "breach count for \"password\" should be greater than 10,000, got {}",
        evaluation.breach_count
    );
    assert!(!evaluation.allowed);
}

#[tokio::test]
#[ignore = "talks to the live pwnedpasswords API"]
async fn fresh_random_password_is_allowed() {
    let checker = checker();
    let cancel = CancellationToken::new();

    // no need for crypto rand
    let mut bytes = [0u8; 36];
    rand::thread_rng().fill_bytes(&mut bytes);
    let password = HEXLOWER.encode(&bytes);

    let evaluation = checker.evaluate(&cancel, &password).await.unwrap();
    assert!(
        evaluation.breach_count < 10,
        "there should be less than 10 breaches for {}",
        password
    );
    assert!(evaluation.allowed);
}

#[tokio::test]
#[ignore = "talks to the live pwnedpasswords API"]
async fn validate_reports_the_observed_count() {
    let checker = checker();
    let cancel = CancellationToken::new();

    match checker.validate(&cancel, "password").await {
        Err(Error::BreachLimit { count }) => assert!(count > 1_000),
        other => panic!("expected a breach limit error, got {:?}", other),
    }
}

#[tokio::test]
#[ignore = "talks to the live pwnedpasswords API"]
async fn evaluate_is_idempotent() {
    let checker = checker();
    let cancel = CancellationToken::new();

    let first = checker.evaluate(&cancel, "password").await.unwrap();
    let second = checker.evaluate(&cancel, "password").await.unwrap();
    assert_eq!(first.breach_count, second.breach_count);
    assert_eq!(first.allowed, second.allowed);
}
