use super::*;
use serde_json::json;

#[test]
fn deserializes_every_representation() {
    let scalar: Value = serde_json::from_value(json!(1.5)).unwrap();
    assert_eq!(scalar, Value::Scalar(1.5));

    let vector: Value = serde_json::from_value(json!([1.0, 2.0, 3.0])).unwrap();
    assert_eq!(vector, Value::Vector(vec![1.0, 2.0, 3.0]));

    let keyed: Value = serde_json::from_value(json!({ "x": 1.0, "y": 2.0 })).unwrap();
    let Value::Keyed(map) = &keyed else {
        panic!("expected keyed value");
    };
    assert_eq!(map.get("x"), Some(&1.0));
    assert_eq!(map.get("y"), Some(&2.0));

    let color: Value = serde_json::from_value(json!("#ff1493")).unwrap();
    assert_eq!(color, Value::Color(Rgb::parse_hex("#ff1493").unwrap()));
}

#[test]
fn malformed_hex_string_is_rejected() {
    assert!(serde_json::from_value::<Value>(json!("#abc")).is_err());
    assert!(serde_json::from_value::<Value>(json!("ff1493")).is_err());
}

#[test]
fn serializes_colors_as_hex_strings() {
    let color = Value::Color(Rgb::parse_hex("#ff1493").unwrap());
    assert_eq!(serde_json::to_value(&color).unwrap(), json!("#ff1493"));
}

#[test]
fn components_round_trip_for_every_shape() {
    let values = [
        Value::Scalar(4.25),
        Value::Vector(vec![1.0, -2.0]),
        serde_json::from_value(json!({ "a": 0.5, "b": 9.0 })).unwrap(),
        Value::Color(Rgb::parse_hex("#204080").unwrap()),
    ];
    for value in values {
        let shape = value.shape();
        let rebuilt = Value::from_components(&shape, &value.components()).unwrap();
        assert_eq!(rebuilt, value);
    }
}

#[test]
fn keyed_components_follow_sorted_key_order() {
    let value: Value = serde_json::from_value(json!({ "z": 3.0, "a": 1.0 })).unwrap();
    assert_eq!(value.components(), vec![1.0, 3.0]);
    assert_eq!(
        value.shape(),
        ValueShape::Keyed(vec!["a".to_string(), "z".to_string()])
    );
}

#[test]
fn from_components_rejects_length_mismatch() {
    let err = Value::from_components(&ValueShape::Vector(3), &[1.0]).unwrap_err();
    assert!(matches!(err, ChoreoError::Value(_)));
}

#[test]
fn zero_matches_shape() {
    assert_eq!(Value::zero(&ValueShape::Scalar), Value::Scalar(0.0));
    assert_eq!(
        Value::zero(&ValueShape::Vector(2)),
        Value::Vector(vec![0.0, 0.0])
    );
    assert_eq!(
        Value::zero(&ValueShape::Color),
        Value::Color(Rgb::parse_hex("#000000").unwrap())
    );
}

#[test]
fn shape_display_is_stable() {
    assert_eq!(ValueShape::Scalar.to_string(), "scalar");
    assert_eq!(ValueShape::Vector(4).to_string(), "vector[4]");
    assert_eq!(
        ValueShape::Keyed(vec!["a".into(), "b".into()]).to_string(),
        "keyed[a,b]"
    );
    assert_eq!(ValueShape::Color.to_string(), "color");
}
