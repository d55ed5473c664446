//! End-to-end cache behavior through the public `ApiCache` handle:
//! expiry, fetch-through, mutation-driven invalidation and key composition.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use api_cache::config::REFERENCE_TTL_MS;
use api_cache::{compose_cache_key, ApiCache, FetchOptions};
use serde_json::{json, Value};
use tokio::time::sleep;

fn new_cache() -> ApiCache<Value> {
    ApiCache::new(300_000)
}

/// Producer that counts its calls and yields `value`.
fn producer(
    calls: &Arc<AtomicUsize>,
    value: Value,
) -> impl FnOnce() -> std::future::Ready<Result<Value, String>> {
    let calls = Arc::clone(calls);
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        std::future::ready(Ok(value))
    }
}

// == Store Expiry ==

#[tokio::test]
async fn test_value_served_until_ttl_elapses() {
    let cache = new_cache();
    cache.set("products", json!([1, 2]), Some(60)).await;

    assert_eq!(cache.get("products").await, Some(json!([1, 2])));

    sleep(Duration::from_millis(90)).await;

    assert!(cache.describe("products").await.unwrap().is_expired);
    assert_eq!(cache.get("products").await, None);
}

#[tokio::test]
async fn test_expired_read_removes_key() {
    let cache = new_cache();
    cache.set("short", json!(1), Some(30)).await;
    cache.set("long", json!(2), None).await;
    sleep(Duration::from_millis(60)).await;

    assert_eq!(cache.len().await, 2);
    assert!(!cache.has("short").await);
    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.keys().await, vec!["long".to_string()]);
}

#[tokio::test]
async fn test_overwrite_resets_age() {
    let cache = new_cache();
    cache.set("countries", json!(["EG"]), Some(10_000)).await;
    sleep(Duration::from_millis(120)).await;

    cache.set("countries", json!(["EG", "SA"]), Some(10_000)).await;

    let info = cache.describe("countries").await.unwrap();
    assert!(info.age_ms < 100, "age should restart, got {}", info.age_ms);
    assert_eq!(cache.len().await, 1);
}

// == Fetch-Through ==

#[tokio::test]
async fn test_warm_key_skips_producer() {
    let cache = new_cache();
    let calls = Arc::new(AtomicUsize::new(0));
    cache.set("categories", json!(["cars"]), None).await;

    let fetched = cache
        .fetch_through("categories", producer(&calls, json!(["boats"])), FetchOptions::new())
        .await
        .unwrap();

    assert!(fetched.from_cache);
    assert_eq!(fetched.value, json!(["cars"]));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cold_key_populates_once() {
    let cache = new_cache();
    let calls = Arc::new(AtomicUsize::new(0));

    let fetched = cache
        .fetch_through(
            "activity_types",
            producer(&calls, json!(["retail"])),
            FetchOptions::new().ttl_ms(REFERENCE_TTL_MS),
        )
        .await
        .unwrap();

    assert!(!fetched.from_cache);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.get("activity_types").await, Some(json!(["retail"])));
    assert_eq!(
        cache.describe("activity_types").await.unwrap().ttl_ms,
        REFERENCE_TTL_MS
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_force_refresh_bypasses_warm_cache() {
    let cache = new_cache();
    let calls = Arc::new(AtomicUsize::new(0));
    cache.set("auctions", json!("v1"), None).await;

    let fetched = cache
        .fetch_through(
            "auctions",
            producer(&calls, json!("v2")),
            FetchOptions::new().force_refresh(true),
        )
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(fetched.value, json!("v2"));
    assert!(!fetched.from_cache);
    assert_eq!(cache.get("auctions").await, Some(json!("v2")));
}

#[tokio::test]
async fn test_producer_failure_propagates() {
    let cache = new_cache();

    let result = cache
        .fetch_through(
            "top_sellers_1",
            || async { Err::<Value, _>("503 Service Unavailable".to_string()) },
            FetchOptions::new(),
        )
        .await;

    assert_eq!(result.unwrap_err(), "503 Service Unavailable");
    assert!(!cache.has("top_sellers_1").await);
}

#[tokio::test]
async fn test_concurrent_cold_fetches_both_run_producer() {
    let cache = new_cache();
    let calls = Arc::new(AtomicUsize::new(0));

    let slow = |calls: Arc<AtomicUsize>, value: Value| {
        move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(50)).await;
            Ok::<_, String>(value)
        }
    };

    let (a, b) = tokio::join!(
        cache.fetch_through("governorates_1", slow(calls.clone(), json!("a")), FetchOptions::new()),
        cache.fetch_through("governorates_1", slow(calls.clone(), json!("b")), FetchOptions::new()),
    );

    // No request coalescing: both producers run, one write wins
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(!a.unwrap().from_cache);
    assert!(!b.unwrap().from_cache);
    assert_eq!(cache.len().await, 1);
}

// == Mutation Wrapper ==

#[tokio::test]
async fn test_mutation_success_invalidates_dependents() {
    let cache = new_cache();
    for key in ["products", "my_products", "countries"] {
        cache.set(key, json!([]), None).await;
    }

    let created = cache
        .with_invalidation(|| async { Ok::<_, String>(json!({"id": 9})) }, &["products"])
        .await
        .unwrap();

    assert_eq!(created, json!({"id": 9}));
    assert!(!cache.has("products").await);
    assert!(!cache.has("my_products").await);
    assert!(cache.has("countries").await);
}

#[tokio::test]
async fn test_mutation_failure_keeps_cache() {
    let cache = new_cache();
    cache.set("products", json!([]), None).await;

    let result = cache
        .with_invalidation(
            || async { Err::<Value, _>("422 Unprocessable Entity".to_string()) },
            &["products"],
        )
        .await;

    assert_eq!(result.unwrap_err(), "422 Unprocessable Entity");
    assert!(cache.has("products").await);
}

// == Invalidation Router ==

#[tokio::test]
async fn test_prefix_invalidation_scope() {
    let cache = new_cache();
    for key in [
        "auction_products_1",
        "auction_products_2",
        "auction_products_other",
        "auctions",
    ] {
        cache.set(key, json!(null), None).await;
    }

    assert_eq!(cache.invalidate("auction_products").await, 3);
    assert_eq!(cache.keys().await, vec!["auctions".to_string()]);
}

#[tokio::test]
async fn test_invalidate_by_id_precision() {
    let cache = new_cache();
    cache.set("auction_role_5", json!(5), None).await;
    cache.set("auction_role_6", json!(6), None).await;

    assert!(cache.invalidate_by_id("auction_role", 5).await);
    assert!(!cache.has("auction_role_5").await);
    assert!(cache.has("auction_role_6").await);
}

// == Key Composition ==

#[test]
fn test_compose_key_order_independent() {
    assert_eq!(
        compose_cache_key("governorates", [("country_id", 1), ("page", 2)]),
        compose_cache_key("governorates", [("page", 2), ("country_id", 1)]),
    );
}

// == Reference-Data Scenario ==

#[tokio::test]
async fn test_countries_scenario() {
    let cache = new_cache();
    let calls = Arc::new(AtomicUsize::new(0));

    cache.set("countries", json!(["EG", "SA"]), Some(3_600_000)).await;
    assert_eq!(cache.get("countries").await, Some(json!(["EG", "SA"])));

    let fetched = cache
        .fetch_through("countries", producer(&calls, json!(["AE"])), FetchOptions::new())
        .await
        .unwrap();
    assert!(fetched.from_cache);
    assert_eq!(fetched.value, json!(["EG", "SA"]));

    cache.clear().await;
    assert_eq!(cache.get("countries").await, None);

    let fetched = cache
        .fetch_through("countries", producer(&calls, json!(["AE"])), FetchOptions::new())
        .await
        .unwrap();
    assert!(!fetched.from_cache);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
