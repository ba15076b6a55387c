use super::*;
use crate::state::test_helpers;
use inventory::{ComponentDraft, ProductDraft};
use std::time::Duration;
use tokio::time::Instant;

#[test]
fn rand_sampler_stays_in_range() {
    let mut sampler = RandSampler;
    for _ in 0..200 {
        let value = sampler.uniform(380.0, 420.0);
        assert!((380.0..420.0).contains(&value), "{value}");
    }
}

#[test]
fn rand_sampler_handles_empty_range() {
    assert!((RandSampler.uniform(5.0, 5.0) - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn execute_lists_seeded_products() {
    let state = test_helpers::test_app_state();
    let products = execute(&state, Endpoint::ListProducts).await.unwrap().into_products().unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn execute_creates_component_with_random_readings_in_range() {
    let state = test_helpers::test_app_state();
    let component = execute(
        &state,
        Endpoint::CreateComponent { product_id: "p2".into(), draft: ComponentDraft::new("Door", "entry sensors") },
    )
    .await
    .unwrap()
    .into_component()
    .unwrap();

    assert_eq!(component.product_id, "p2");
    assert_eq!(component.temperature.len(), 7);
    assert!(component.temperature.iter().all(|t| (20.0..=25.0).contains(t)));
    assert!(component.humidity.iter().all(|h| (45.0..=55.0).contains(h)));
    assert!(component.gas_level.iter().all(|g| (380.0..=420.0).contains(g)));
    assert_eq!(state.store.read().await.components("p2").len(), 1);
}

#[tokio::test]
async fn execute_propagates_not_found() {
    let state = test_helpers::test_app_state();
    let err = execute(&state, Endpoint::ToggleProduct { id: "missing".into() }).await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("missing".into()));
}

#[tokio::test(start_paused = true)]
async fn execute_waits_for_simulated_latency() {
    let mut state = test_helpers::test_app_state();
    state.simulated_latency = Duration::from_millis(500);

    let started = Instant::now();
    execute(&state, Endpoint::CreateProduct(ProductDraft::new("Annex", ""))).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(500));
}
