use super::*;
use serde_json::json;

#[test]
fn product_uses_contract_field_names() {
    let product = Product {
        id: "p1".into(),
        name: "Cold Storage Unit A".into(),
        description: "Main cold storage unit".into(),
        is_active: true,
    };
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(
        value,
        json!({
            "_id": "p1",
            "name": "Cold Storage Unit A",
            "description": "Main cold storage unit",
            "isActive": true
        })
    );
}

#[test]
fn component_parses_contract_payload() {
    let value = json!({
        "_id": "c1",
        "name": "Section 1 Sensors",
        "description": "Primary monitoring sensors",
        "productId": "p1",
        "temperature": [2.0, 3.0],
        "humidity": [65.0, 67.0],
        "gasLevel": [400.0, 410.0],
        "timestamps": ["2026-01-01T00:00:00.000Z", "2026-01-01T01:00:00.000Z"]
    });
    let component: Component = serde_json::from_value(value).unwrap();
    assert_eq!(component.id, "c1");
    assert_eq!(component.product_id, "p1");
    assert_eq!(component.gas_level, vec![400.0, 410.0]);
    assert_eq!(component.len(), 2);
    assert!(!component.is_empty());
}

#[test]
fn drafts_default_missing_fields_to_empty() {
    let draft: ProductDraft = serde_json::from_value(json!({ "name": "X" })).unwrap();
    assert_eq!(draft, ProductDraft::new("X", ""));

    let draft: ComponentDraft = serde_json::from_value(json!({})).unwrap();
    assert_eq!(draft, ComponentDraft::default());
}
