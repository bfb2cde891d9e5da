//! Schema inference tests

use super::*;
use crate::classify::PrimitiveKind;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

fn root(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

#[test]
fn test_integer_property() {
    let doc = root(json!({"prop": 1234}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    assert_eq!(model.len(), 1);
    let class = model.get("Test").unwrap();
    assert_eq!(class.name, "Test");
    assert_eq!(class.properties.len(), 1);

    let prop = &class.properties[0];
    assert_eq!(prop.name, "prop");
    assert_eq!(prop.kind, PrimitiveKind::Integer);
    assert_eq!(prop.param_type, "int");
    assert_eq!(prop.literal_value, json!(1234));
    assert!(!prop.is_custom_type);
    assert!(prop.array_element_class_key.is_none());
}

#[test]
fn test_string_property_escapes_quotes() {
    let doc = root(json!({"prop": "It's me"}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    let prop = &model.get("Test").unwrap().properties[0];
    assert_eq!(prop.kind, PrimitiveKind::String);
    assert_eq!(prop.param_type, "string");
    assert_eq!(prop.literal_value, json!("It\\'s me"));
}

#[test]
fn test_empty_array_property() {
    let doc = root(json!({"prop": []}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    assert_eq!(model.len(), 1);
    let prop = &model.get("Test").unwrap().properties[0];
    assert_eq!(prop.kind, PrimitiveKind::Array);
    assert_eq!(prop.param_type, "array");
    assert_eq!(prop.literal_value, json!("[]"));
    assert!(prop.array_element_class_key.is_none());
}

#[test]
fn test_null_property() {
    let doc = root(json!({"prop": null}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    let prop = &model.get("Test").unwrap().properties[0];
    assert_eq!(prop.kind, PrimitiveKind::Null);
    assert_eq!(prop.param_type, "");
    assert_eq!(prop.literal_value, json!(null));
}

#[test]
fn test_double_property_passes_through() {
    let doc = root(json!({"ratio": 0.25}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    let prop = &model.get("Test").unwrap().properties[0];
    assert_eq!(prop.kind, PrimitiveKind::Double);
    assert_eq!(prop.param_type, "double");
    assert_eq!(prop.literal_value, json!(0.25));
}

#[test]
fn test_array_of_objects() {
    let doc = root(json!({"foo": [{"bar": 1234}]}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "T").unwrap();

    assert_eq!(model.len(), 2);

    let element = model.get("Foo").unwrap();
    assert_eq!(element.name, "Foo");
    assert_eq!(element.namespace, "T\\NTest");
    assert_eq!(element.properties.len(), 1);
    assert_eq!(element.properties[0].name, "bar");
    assert_eq!(element.properties[0].param_type, "int");

    let class = model.get("Test").unwrap();
    assert_eq!(class.namespace, "T");
    let prop = &class.properties[0];
    assert_eq!(prop.kind, PrimitiveKind::Array);
    assert_eq!(prop.param_type, "array");
    assert_eq!(prop.literal_value, json!("[]"));
    assert_eq!(
        prop.array_element_class_key.as_deref(),
        Some("T\\NTest\\Foo")
    );
}

#[test]
fn test_array_samples_first_element_only() {
    // Later elements are deliberately not inspected; "extra" never shows up.
    let doc = root(json!({"items": [{"id": 1}, {"id": 2, "extra": true}]}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    let element = model.get("Items").unwrap();
    assert_eq!(element.properties.len(), 1);
    assert_eq!(element.properties[0].name, "id");
}

#[test]
fn test_nested_object_property() {
    let doc = root(json!({"owner": {"name": "Ada"}}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "T").unwrap();

    let owner = model.get("Owner").unwrap();
    assert_eq!(owner.namespace, "T\\NTest");

    let prop = &model.get("Test").unwrap().properties[0];
    assert_eq!(prop.kind, PrimitiveKind::Object);
    assert!(prop.is_custom_type);
    assert_eq!(prop.param_type, "T\\NTest\\Owner");
    // The namespace field tracks the declaring class, not the referenced type.
    assert_eq!(prop.namespace, "T");
}

#[test]
fn test_nested_name_collision_gets_suffix() {
    let doc = root(json!({"location": {"foo": 1234, "location": {"bar": 1234}}}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    let keys: Vec<&str> = model.keys().collect();
    assert_eq!(keys, vec!["Location", "Location_1", "Test"]);

    // Both descriptors keep the simple display name.
    assert_eq!(model.get("Location").unwrap().name, "Location");
    assert_eq!(model.get("Location_1").unwrap().name, "Location");

    // The inner object is inserted first, the outer one gets the suffix.
    let inner = model.get("Location").unwrap();
    assert_eq!(inner.properties[0].name, "bar");
    let outer = model.get("Location_1").unwrap();
    assert_eq!(outer.properties[0].name, "foo");
}

#[test]
fn test_collision_reference_uses_allocated_key() {
    let doc = root(json!({
        "a": {"items": [{"x": 1}]},
        "b": {"items": [{"y": 1}]}
    }));
    let model = SchemaInferencer::new()
        .with_recursion_limit(5)
        .infer(&doc, "Test", "")
        .unwrap();

    assert!(model.contains_key("Items"));
    assert!(model.contains_key("Items_1"));

    let b = model.get("B").unwrap();
    let items = &b.properties[0];
    // The second Items class was suffixed, and the reference follows it.
    assert_eq!(
        items.array_element_class_key.as_deref(),
        Some("\\NTest\\NB\\Items_1")
    );
}

#[test]
fn test_empty_object_produces_no_class() {
    let doc = root(json!({"meta": {}, "id": 7}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    assert_eq!(model.len(), 1);
    let class = model.get("Test").unwrap();
    // The empty object still contributes a property.
    assert_eq!(class.properties.len(), 2);
    let meta = &class.properties[0];
    assert_eq!(meta.name, "meta");
    assert!(meta.is_custom_type);
}

#[test]
fn test_recursion_limit_bounds_descent() {
    let doc = root(json!({"a": {"b": {"c": {"d": 1}}}}));
    let model = SchemaInferencer::new()
        .with_recursion_limit(2)
        .infer(&doc, "Test", "")
        .unwrap();

    // Depth 0 = Test, depth 1 = A; B sits at the limit and is dropped.
    let keys: Vec<&str> = model.keys().collect();
    assert_eq!(keys, vec!["A", "Test"]);

    // The dropped object's property survives on its parent.
    let a = model.get("A").unwrap();
    assert_eq!(a.properties.len(), 1);
    assert_eq!(a.properties[0].name, "b");
}

#[test]
fn test_recursion_limit_zero_yields_empty_model() {
    let doc = root(json!({"prop": 1}));
    let model = SchemaInferencer::new()
        .with_recursion_limit(0)
        .infer(&doc, "Test", "")
        .unwrap();

    assert!(model.is_empty());
}

#[test]
fn test_determinism() {
    let doc = root(json!({
        "name": "x",
        "tags": [{"label": "a"}],
        "owner": {"id": 1, "home": {"city": "b"}}
    }));

    let inferencer = SchemaInferencer::new().with_recursion_limit(10);
    let first = inferencer.infer(&doc, "Test", "App").unwrap();
    let second = inferencer.infer(&doc, "Test", "App").unwrap();

    assert_eq!(first, second);
    let keys: Vec<&str> = first.keys().collect();
    let keys_again: Vec<&str> = second.keys().collect();
    assert_eq!(keys, keys_again);
}

#[test]
fn test_property_name_sanitized() {
    let doc = root(json!({"$ref-id": 5}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();

    assert_eq!(model.get("Test").unwrap().properties[0].name, "refid");
}

#[test]
fn test_access_level_applied_to_all_properties() {
    let doc = root(json!({"a": 1, "b": "x"}));
    let model = SchemaInferencer::new()
        .with_access_level(AccessLevel::Public)
        .infer(&doc, "Test", "")
        .unwrap();

    for prop in &model.get("Test").unwrap().properties {
        assert_eq!(prop.access_level, AccessLevel::Public);
    }
}

#[test]
fn test_invalid_access_level_rejected() {
    let result = SchemaInferencer::new().with_access_level_str("root");
    assert!(matches!(
        result,
        Err(Error::InvalidAccessLevel { .. })
    ));
}

#[test]
fn test_invalid_class_name_rejected() {
    let doc = root(json!({"a": 1}));
    let result = SchemaInferencer::new().infer(&doc, "9Lives", "");
    assert!(matches!(result, Err(Error::InvalidClassName { .. })));

    let result = SchemaInferencer::new().infer(&doc, "My Class", "");
    assert!(matches!(result, Err(Error::InvalidClassName { .. })));
}

#[test]
fn test_invalid_namespace_rejected() {
    let doc = root(json!({"a": 1}));
    let result = SchemaInferencer::new().infer(&doc, "Test", "1App");
    assert!(matches!(result, Err(Error::InvalidNamespace { .. })));

    // Empty namespace is fine.
    assert!(SchemaInferencer::new().infer(&doc, "Test", "").is_ok());
    // So are nested segments.
    assert!(SchemaInferencer::new()
        .infer(&doc, "Test", "App\\Models")
        .is_ok());
}

#[test]
fn test_full_name() {
    let doc = root(json!({"a": 1}));

    let model = SchemaInferencer::new().infer(&doc, "Test", "App").unwrap();
    assert_eq!(model.get("Test").unwrap().full_name(), "App\\Test");

    let model = SchemaInferencer::new().infer(&doc, "Test", "").unwrap();
    assert_eq!(model.get("Test").unwrap().full_name(), "Test");
}

#[test]
fn test_parse_document_object_root() {
    let map = parse_document(r#"{"a": 1}"#).unwrap();
    assert_eq!(map.len(), 1);
}

#[test]
fn test_parse_document_array_root_uses_first_element() {
    let map = parse_document(r#"[{"a": 1}, {"b": 2}]"#).unwrap();
    assert!(map.contains_key("a"));
    assert!(!map.contains_key("b"));
}

#[test]
fn test_parse_document_rejects_non_object_roots() {
    assert!(matches!(
        parse_document("42"),
        Err(Error::BadJsonDecode { .. })
    ));
    assert!(matches!(
        parse_document(r#"["a", "b"]"#),
        Err(Error::BadJsonDecode { .. })
    ));
    assert!(matches!(
        parse_document("[]"),
        Err(Error::BadJsonDecode { .. })
    ));
    assert!(matches!(
        parse_document("not json"),
        Err(Error::BadJsonDecode { .. })
    ));
}

#[test]
fn test_model_serializes_with_template_field_names() {
    let doc = root(json!({"prop": 1234}));
    let model = SchemaInferencer::new().infer(&doc, "Test", "T").unwrap();

    let value = serde_json::to_value(&model).unwrap();
    let class = &value[0];
    assert_eq!(class["name"], "Test");
    assert_eq!(class["classNamespace"], "T");
    let prop = &class["properties"][0];
    assert_eq!(prop["name"], "prop");
    assert_eq!(prop["kind"], "integer");
    assert_eq!(prop["paramType"], "int");
    assert_eq!(prop["literalValue"], 1234);
    assert_eq!(prop["isCustomType"], false);
    assert_eq!(prop["accessLevel"], "private");
}
