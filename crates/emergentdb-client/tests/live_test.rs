//! Smoke tests against the production EmergentDB API.
//!
//! Ignored by default. Run with `EMERGENTDB_API_KEY` set:
//!
//! ```sh
//! cargo test -p emergentdb-client --test live_test -- --ignored
//! ```
//!
//! The backing index is configured for 1536-dim vectors.

use emergentdb_client::{EmergentDb, InsertRequest, SearchRequest, VectorEntry};

const DIM: usize = 1536;
const NAMESPACE: &str = "rust-sdk-test";

fn live_client() -> EmergentDb {
    let api_key = std::env::var("EMERGENTDB_API_KEY")
        .expect("EMERGENTDB_API_KEY is required for live tests");
    EmergentDb::new(api_key).unwrap()
}

// Reproducible pseudo-random vector in [-0.1, 0.1], seeded per test vector.
fn test_vec(seed: u64) -> Vec<f32> {
    let mut state = seed.wrapping_add(0x9e3779b97f4a7c15);
    (0..DIM)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 32) as u32 as f32 / u32::MAX as f32;
            unit * 0.2 - 0.1
        })
        .collect()
}

#[tokio::test]
#[ignore] // Requires EMERGENTDB_API_KEY
async fn test_live_insert_search_delete_roundtrip() {
    let db = live_client();

    let result = db
        .insert(
            InsertRequest::new(1, test_vec(1))
                .with_metadata(serde_json::json!({"title": "Rust SDK doc 1"}))
                .with_namespace(NAMESPACE),
        )
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.namespace, NAMESPACE);

    let response = db
        .search(
            SearchRequest::new(test_vec(1))
                .with_k(5)
                .with_metadata(true)
                .with_namespace(NAMESPACE),
        )
        .await
        .unwrap();
    assert!(response.count > 0);
    let hit = response.results.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(hit.metadata.as_ref().unwrap()["title"], "Rust SDK doc 1");

    // Namespaced vectors must not surface in the default namespace.
    let default_response = db
        .search(SearchRequest::new(test_vec(1)).with_k(5))
        .await
        .unwrap();
    assert!(default_response.results.iter().all(|r| r.id != 1));

    let deleted = db.delete(1, Some(NAMESPACE)).await.unwrap();
    assert!(deleted.deleted);

    let after = db
        .search(SearchRequest::new(test_vec(1)).with_namespace(NAMESPACE))
        .await
        .unwrap();
    assert!(after.results.iter().all(|r| r.id != 1));
}

#[tokio::test]
#[ignore] // Requires EMERGENTDB_API_KEY
async fn test_live_batch_insert_and_cleanup() {
    let db = live_client();

    let entries: Vec<VectorEntry> = (1..=5u64)
        .map(|i| {
            VectorEntry::new(i, test_vec(100 + i))
                .with_metadata(serde_json::json!({"batch": true, "index": i}))
        })
        .collect();
    let result = db
        .batch_insert(&entries, Some("rust-batch-test"))
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.count, 5);
    assert_eq!(result.ids.len(), 5);

    for i in 1..=5u64 {
        let deleted = db.delete(i, Some("rust-batch-test")).await.unwrap();
        assert!(deleted.deleted);
    }
}

#[tokio::test]
#[ignore] // Requires EMERGENTDB_API_KEY
async fn test_live_list_namespaces() {
    let db = live_client();
    // The tenant always has at least the default namespace once it has data;
    // the call itself succeeding is the contract here.
    let _namespaces = db.list_namespaces().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires EMERGENTDB_API_KEY
async fn test_live_analytics_reports() {
    let db = live_client();
    db.analytics_endpoints().await.unwrap();
    db.analytics_namespaces().await.unwrap();
    db.analytics_latency().await.unwrap();
    db.analytics_errors().await.unwrap();
    db.analytics_keys().await.unwrap();
    db.analytics_growth().await.unwrap();
}
