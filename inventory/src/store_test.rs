use super::*;
use crate::endpoint::Method;
use crate::sample::{Midpoint, SAMPLE_POINTS};
use std::collections::HashSet;
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2026-05-04 09:15:00 UTC);

fn run(store: &mut Store, endpoint: Endpoint) -> Result<Reply, ApiError> {
    store.handle(endpoint, NOW, &mut Midpoint)
}

fn product(id: &str, is_active: bool) -> Product {
    Product { id: id.into(), name: id.to_uppercase(), description: String::new(), is_active }
}

// =============================================================================
// Products
// =============================================================================

#[test]
fn create_product_is_active_with_unique_id() {
    let mut store = Store::new();
    let ids: HashSet<String> = (0..50)
        .map(|i| {
            let created = store.create_product(ProductDraft::new(format!("unit {i}"), ""));
            assert!(created.is_active);
            created.id
        })
        .collect();
    assert_eq!(ids.len(), 50);
    assert_eq!(store.products().len(), 50);
}

#[test]
fn create_product_appends_in_order() {
    let mut store = Store::with_products(vec![product("p1", true)]);
    let created = store.create_product(ProductDraft::new("X", "new"));
    let names: Vec<&str> = store.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["P1", "X"]);
    assert!(created.id.starts_with('p'));
    assert_eq!(created.description, "new");
}

#[test]
fn get_unknown_product_is_not_found() {
    let mut store = Store::demo(NOW);
    let err = run(&mut store, Endpoint::GetProduct { id: "nope".into() }).unwrap_err();
    assert_eq!(err, ApiError::NotFound("nope".into()));
}

#[test]
fn toggle_twice_restores_flag() {
    let mut store = Store::with_products(vec![product("p1", true)]);
    assert!(!store.toggle_product("p1").unwrap().is_active);
    assert!(store.toggle_product("p1").unwrap().is_active);
    assert!(store.product("p1").unwrap().is_active);
}

#[test]
fn toggle_unknown_product_is_not_found() {
    let mut store = Store::new();
    let err = run(&mut store, Endpoint::ToggleProduct { id: "p9".into() }).unwrap_err();
    assert_eq!(err, ApiError::NotFound("p9".into()));
}

#[test]
fn delete_product_cascades_to_components() {
    let mut store = Store::demo(NOW);
    assert_eq!(store.components("p1").len(), 2);

    let reply = run(&mut store, Endpoint::DeleteProduct { id: "p1".into() }).unwrap();
    assert_eq!(reply, Reply::Ack(Ack {}));
    assert!(store.product("p1").is_err());
    assert!(store.components("p1").is_empty());
    assert_eq!(store.components("p3").len(), 1);

    let listed = run(&mut store, Endpoint::ListComponents { product_id: "p1".into() }).unwrap();
    assert_eq!(listed, Reply::Components(Vec::new()));
}

#[test]
fn delete_unknown_product_is_a_no_op() {
    let mut store = Store::demo(NOW);
    assert!(!store.delete_product("missing"));
    assert_eq!(store.products().len(), 3);
    assert!(run(&mut store, Endpoint::DeleteProduct { id: "missing".into() }).is_ok());
}

// =============================================================================
// Components
// =============================================================================

#[test]
fn list_components_of_unknown_product_is_empty() {
    let mut store = Store::new();
    let reply = run(&mut store, Endpoint::ListComponents { product_id: "ghost".into() }).unwrap();
    assert_eq!(reply, Reply::Components(Vec::new()));
}

#[test]
fn create_component_generates_seven_hourly_points() {
    let mut store = Store::with_products(vec![product("p1", true)]);
    let reply = run(
        &mut store,
        Endpoint::CreateComponent { product_id: "p1".into(), draft: ComponentDraft::new("Bay 4", "loading dock") },
    )
    .unwrap();
    let component = reply.into_component().unwrap();

    assert_eq!(component.product_id, "p1");
    assert!(component.id.starts_with('c'));
    assert_eq!(component.temperature.len(), SAMPLE_POINTS);
    assert_eq!(component.humidity.len(), SAMPLE_POINTS);
    assert_eq!(component.gas_level.len(), SAMPLE_POINTS);
    assert_eq!(component.timestamps.len(), SAMPLE_POINTS);

    let parsed: Vec<OffsetDateTime> = component
        .timestamps
        .iter()
        .map(|s| OffsetDateTime::parse(s, &Rfc3339).unwrap())
        .collect();
    assert!(parsed.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(parsed.last().copied(), Some(NOW));

    assert_eq!(store.components("p1"), std::slice::from_ref(&component));
}

#[test]
fn create_component_for_unknown_product_creates_nothing() {
    let mut store = Store::new();
    let err = run(
        &mut store,
        Endpoint::CreateComponent { product_id: "ghost".into(), draft: ComponentDraft::default() },
    )
    .unwrap_err();
    assert_eq!(err, ApiError::NotFound("ghost".into()));
    assert!(store.components("ghost").is_empty());
}

#[test]
fn delete_component_removes_only_that_component() {
    let mut store = Store::demo(NOW);
    run(&mut store, Endpoint::DeleteComponent { product_id: "p1".into(), component_id: "c1".into() }).unwrap();
    let remaining: Vec<&str> = store.components("p1").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(remaining, vec!["c2"]);

    assert!(!store.delete_component("p1", "c1"));
    assert!(!store.delete_component("ghost", "c1"));
}

// =============================================================================
// Seed data and end-to-end flow
// =============================================================================

#[test]
fn demo_store_matches_seed_dataset() {
    let store = Store::demo(NOW);
    let flags: Vec<(&str, bool)> = store.products().iter().map(|p| (p.id.as_str(), p.is_active)).collect();
    assert_eq!(flags, vec![("p1", true), ("p2", false), ("p3", true)]);
    assert!(store.components("p2").is_empty());

    let freezer = &store.components("p3")[0];
    assert_eq!(freezer.temperature[0], -18.0);
    assert_eq!(freezer.len(), SAMPLE_POINTS);
    assert_eq!(freezer.timestamps.last().map(String::as_str), Some("2026-05-04T09:15:00.000Z"));
}

#[test]
fn toggle_delete_create_scenario() {
    let mut store = Store::with_products(vec![product("p1", true), product("p2", false)]);

    let toggled = run(&mut store, Endpoint::ToggleProduct { id: "p2".into() }).unwrap().into_product().unwrap();
    assert!(toggled.is_active);

    run(&mut store, Endpoint::DeleteProduct { id: "p1".into() }).unwrap();
    let ids: Vec<String> = store.products().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["p2".to_owned()]);

    let created = run(&mut store, Endpoint::CreateProduct(ProductDraft::new("X", "")))
        .unwrap()
        .into_product()
        .unwrap();
    let listed = run(&mut store, Endpoint::ListProducts).unwrap().into_products().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, "p2");
    assert!(listed[0].is_active);
    assert_eq!(listed[1], created);
    assert_eq!(listed[1].name, "X");
    assert!(listed[1].is_active);
    assert_ne!(listed[1].id, "p1");
    assert_ne!(listed[1].id, "p2");
}

#[test]
fn resolved_routes_drive_the_store() {
    let mut store = Store::demo(NOW);
    let endpoint = Endpoint::resolve(Some(Method::Put), "/products/p2/toggle", None).unwrap();
    let product = run(&mut store, endpoint).unwrap().into_product().unwrap();
    assert_eq!(product.id, "p2");
    assert!(product.is_active);
}
