use super::*;
use futures::executor::block_on;
use inventory::sample::Midpoint;

fn mock_with(products: &[(&str, bool)]) -> ApiClient {
    let products = products
        .iter()
        .map(|(id, is_active)| Product {
            id: (*id).to_owned(),
            name: format!("Unit {id}"),
            description: String::new(),
            is_active: *is_active,
        })
        .collect();
    let backend = MockBackend::with_sampler(Store::with_products(products), Box::new(Midpoint))
        .with_latency(Duration::ZERO);
    ApiClient::Mock(backend)
}

#[test]
fn mock_defaults_to_half_second_latency() {
    let backend = MockBackend::new(Store::new());
    assert_eq!(backend.latency(), Duration::from_millis(500));
}

thread_local! {
    static PAUSES: std::cell::RefCell<Vec<Duration>> = const { std::cell::RefCell::new(Vec::new()) };
}

fn record_pause(latency: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
    PAUSES.with(|p| p.borrow_mut().push(latency));
    Box::pin(std::future::ready(()))
}

#[test]
fn mock_waits_out_latency_before_every_request() {
    PAUSES.with(|p| p.borrow_mut().clear());
    let api = ApiClient::Mock(
        MockBackend::with_sampler(Store::demo(OffsetDateTime::now_utc()), Box::new(Midpoint)).with_pause(record_pause),
    );

    block_on(async {
        api.list_products().await.unwrap();
        assert!(api.get_product("missing").await.is_err());
    });

    let pauses = PAUSES.with(|p| p.borrow().clone());
    assert_eq!(pauses, vec![DEFAULT_MOCK_LATENCY; 2]);
}

#[test]
fn mock_skips_the_timer_at_zero_latency() {
    PAUSES.with(|p| p.borrow_mut().clear());
    let api = ApiClient::Mock(
        MockBackend::with_sampler(Store::new(), Box::new(Midpoint))
            .with_latency(Duration::ZERO)
            .with_pause(record_pause),
    );

    block_on(async {
        api.list_products().await.unwrap();
    });

    assert!(PAUSES.with(|p| p.borrow().is_empty()));
}

#[test]
fn http_backend_trims_trailing_slash() {
    let backend = HttpBackend::new("https://api.example.com/");
    assert_eq!(
        backend.url(&Endpoint::ToggleProduct { id: "p1".into() }),
        "https://api.example.com/products/p1/toggle"
    );
}

#[test]
fn http_backend_same_origin_when_base_is_empty() {
    let backend = HttpBackend::new("");
    assert_eq!(backend.url(&Endpoint::ListProducts), "/products");
}

#[test]
fn http_backend_fails_outside_browser() {
    let client = ApiClient::http("");
    let err = block_on(client.list_products()).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn end_to_end_scenario_over_mock() {
    let client = mock_with(&[("p1", true), ("p2", false)]);

    let toggled = block_on(client.toggle_product("p2")).unwrap();
    assert!(toggled.is_active);

    block_on(client.delete_product("p1")).unwrap();
    let ids: Vec<String> = block_on(client.list_products()).unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["p2"]);

    let created = block_on(client.create_product(ProductDraft::new("X", ""))).unwrap();
    let products = block_on(client.list_products()).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "p2");
    assert!(products[0].is_active);
    assert_eq!(products[1], created);
    assert!(created.is_active);
    assert_ne!(created.id, "p1");
    assert_ne!(created.id, "p2");
}

#[test]
fn mock_component_lifecycle() {
    let client = mock_with(&[("p1", true)]);

    let component = block_on(client.create_component("p1", ComponentDraft::new("Aisle", "racks"))).unwrap();
    assert_eq!(component.temperature, vec![22.5; 7]);
    assert_eq!(component.timestamps.len(), 7);

    let listed = block_on(client.list_components("p1")).unwrap();
    assert_eq!(listed, vec![component.clone()]);

    block_on(client.delete_component("p1", &component.id)).unwrap();
    assert!(block_on(client.list_components("p1")).unwrap().is_empty());
}

#[test]
fn mock_missing_product_is_not_found() {
    let client = mock_with(&[]);
    assert_eq!(block_on(client.get_product("nope")).unwrap_err(), ApiError::NotFound("nope".into()));
    assert!(block_on(client.list_components("nope")).unwrap().is_empty());
}

#[test]
fn fetch_resolves_route_strings() {
    let client = mock_with(&[("p1", true)]);

    let reply = block_on(client.fetch(None, "/products/p1", None)).unwrap();
    assert_eq!(reply.into_product().unwrap().id, "p1");

    let reply = block_on(client.fetch(
        Some(Method::Post),
        "/products/createProduct",
        Some(r#"{"name":"Loading Dock","description":"north"}"#),
    ))
    .unwrap();
    assert_eq!(reply.into_product().unwrap().name, "Loading Dock");
}

#[test]
fn fetch_rejects_unknown_routes() {
    let client = mock_with(&[("p1", true)]);
    let err = block_on(client.fetch(Some(Method::Patch), "/products/p1", None)).unwrap_err();
    assert_eq!(err, ApiError::UnhandledRoute { method: Method::Patch, path: "/products/p1".into() });
}

#[test]
fn clones_share_one_store() {
    let client = mock_with(&[]);
    let other = client.clone();
    block_on(client.create_product(ProductDraft::new("Shared", ""))).unwrap();
    assert_eq!(block_on(other.list_products()).unwrap().len(), 1);
}
