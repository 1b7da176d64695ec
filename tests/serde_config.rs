//! Loading anchor tables and guardrail policy from JSON.
//!
//! Run with: `cargo test --features serde`

#![cfg(feature = "serde")]

use valence_core::anchor::{AnchorTable, EnergyTier};
use valence_core::compass::polar_compass;
use valence_core::guardrail::GuardrailConfig;
use valence_core::ClassificationResult;

#[test]
fn test_table_loads_from_json_in_order() {
    let json = r#"[
        {"label": "Calm", "radius": 0.4, "angle": 300.0, "energy": "Low", "description": "At ease."},
        {"label": "Thrilled", "radius": 0.8, "angle": 12.0, "energy": "Extreme", "description": "Buzzing."},
        {"label": "Neutral", "radius": 0.0, "angle": 0.0, "energy": "Low", "description": ""}
    ]"#;
    let table: AnchorTable = serde_json::from_str(json).expect("valid table");

    let labels: Vec<&str> = table.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, ["Calm", "Thrilled", "Neutral"]);
    assert_eq!(table.get("Thrilled").map(|a| a.energy), Some(EnergyTier::Extreme));
}

#[test]
fn test_invalid_table_is_rejected_on_load() {
    let duplicate = r#"[
        {"label": "Calm", "radius": 0.4, "angle": 300.0, "energy": "Low", "description": ""},
        {"label": "Calm", "radius": 0.5, "angle": 290.0, "energy": "Low", "description": ""},
        {"label": "Neutral", "radius": 0.0, "angle": 0.0, "energy": "Low", "description": ""}
    ]"#;
    let err = serde_json::from_str::<AnchorTable>(duplicate).unwrap_err();
    assert!(err.to_string().contains("duplicate anchor label"), "{err}");

    let no_neutral = r#"[
        {"label": "Calm", "radius": 0.4, "angle": 300.0, "energy": "Low", "description": ""}
    ]"#;
    assert!(serde_json::from_str::<AnchorTable>(no_neutral).is_err());
}

#[test]
fn test_reference_compass_survives_json() {
    let json = serde_json::to_string(&polar_compass()).expect("serialise compass");
    let restored: AnchorTable = serde_json::from_str(&json).expect("deserialise compass");
    assert_eq!(restored.as_slice(), polar_compass().as_slice());
}

#[test]
fn test_partial_policy_falls_back_to_defaults() {
    let config: GuardrailConfig =
        serde_json::from_str(r#"{"max_blend_angle": 45.0}"#).expect("partial config");
    assert_eq!(
        config,
        GuardrailConfig {
            max_blend_angle: 45.0,
            ..GuardrailConfig::default()
        }
    );
}

#[test]
fn test_result_serialises_as_plain_fields() {
    let value = serde_json::to_value(ClassificationResult::neutral()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"radius": 0.0, "angle": 0.0, "label": "Neutral"})
    );
}
