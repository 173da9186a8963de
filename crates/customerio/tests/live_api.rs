//! Live API integration tests.
//!
//! These tests run against the real Customer.io track API. Set
//! `TEST_CUSTOMER_SITE_ID` and `TEST_CUSTOMER_API_KEY` to a test workspace's
//! credentials.
//!
//! Run with: cargo test --test live_api -- --nocapture --ignored

use serde_json::{json, Value};
use uuid::Uuid;

use customerio::{Attributes, Credentials, CustomerIo};

const TEST_EMAIL: &str = "customerio@example.com";

fn live_client(http: &reqwest::Client) -> CustomerIo<&reqwest::Client> {
    let credentials = Credentials::from_env_vars("TEST_CUSTOMER_SITE_ID", "TEST_CUSTOMER_API_KEY")
        .expect("TEST_CUSTOMER_SITE_ID and TEST_CUSTOMER_API_KEY must be set to run live tests");
    CustomerIo::new(credentials, http)
}

fn generate_test_id() -> String {
    format!("customerio-rs-test-{}", Uuid::new_v4())
}

fn attrs(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn live_customer_lifecycle() {
    let http = reqwest::Client::new();
    let client = live_client(&http);
    let id = generate_test_id();

    println!("Testing with customer: {id}");

    client
        .identify(&id, TEST_EMAIL, None)
        .await
        .expect("identify without attributes failed");

    let result = async {
        client
            .identify(&id, TEST_EMAIL, Some(attrs(json!({ "foo": 42 }))))
            .await?;
        client.track(&id, "nil-attrs", None).await?;
        client
            .track(
                &id,
                "with-attrs",
                Some(attrs(json!({ "bar": "baz", "quux": 2.5 }))),
            )
            .await?;
        client.track_recipient(TEST_EMAIL, "nil-attrs", None).await?;
        client
            .track_recipient(
                TEST_EMAIL,
                "with-attrs",
                Some(attrs(json!({ "bar": "baz", "quux": 2.5 }))),
            )
            .await
    }
    .await;

    // Always clean up the test customer, even if a step failed.
    client.delete(&id).await.expect("delete failed");

    result.expect("live customer lifecycle failed");
    println!("\n✓ Customer lifecycle test passed!");
}

#[tokio::test]
#[ignore]
async fn live_invalid_credentials_rejected() {
    let http = reqwest::Client::new();
    let client = CustomerIo::new(Credentials::new("invalid-site", "invalid-key"), &http);

    let err = client
        .identify(&generate_test_id(), TEST_EMAIL, None)
        .await
        .expect_err("invalid credentials should be rejected");

    println!("Error: {err}");
    assert!(err.status().is_some(), "expected an API error, got {err:?}");
}
