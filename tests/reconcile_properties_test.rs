//! Integration tests for field reconciliation

use khione::core::reconcile::{
    reconcile, resolve_model, FieldLabelMap, EXCLUDED_KEYS, FORCED_INPUT_KEYS,
};
use khione::domain::{CompressorModel, DisplayField, FormInput, Refrigerant, ResultSet};
use serde_json::json;
use test_case::test_case;

fn results(value: serde_json::Value) -> ResultSet {
    serde_json::from_value(value).unwrap()
}

fn scenario_input() -> FormInput {
    FormInput {
        model: CompressorModel::Krs4115,
        refrigerant: Refrigerant::Ammonia,
        evap_temp: 10.0,
        cond_temp: 30.0,
        superheat: 0.0,
        speed: 2980,
    }
}

fn value_of<'a>(fields: &'a [DisplayField], label: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.label == label)
        .map(|f| f.value.as_str())
}

fn sample_results() -> Vec<ResultSet> {
    vec![
        results(json!({})),
        results(json!({"Compressor Model": "KRS4115", "h1": 5, "Discharge Pressure": 12.34})),
        results(json!({
            "Speed (RPM)": 1450,
            "evap_temp": -40,
            "h2": 1.5,
            "h3": null,
            "COP": 4.56789,
            "Status": "ok",
            "Refrigerant": null
        })),
        results(json!({"Oil Cooling": true, "Stages": [1, 2], "Capacity (kW)": "n/a"})),
    ]
}

#[test]
fn test_reference_scenario() {
    let result = results(json!({
        "Compressor Model": "KRS4115",
        "h1": 5,
        "Discharge Pressure": 12.34
    }));

    let fields = reconcile(&scenario_input(), Some(&result));

    assert_eq!(value_of(&fields, "Evaporation Temperature (°C)"), Some("10.00"));
    assert_eq!(value_of(&fields, "Discharge Pressure"), Some("12.34"));
    assert!(fields.iter().all(|f| f.label != "h1"));
    assert_eq!(
        fields.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec![
            "Compressor Model: KRS4115",
            "Discharge Pressure: 12.34",
            "Refrigerant: Ammonia",
            "Evaporation Temperature (°C): 10.00",
            "Condenser Temperature (°C): 30.00",
            "Superheat (°C): 0.00",
            "Speed (RPM): 2980.00",
        ]
    );
}

#[test]
fn test_reconcile_is_deterministic() {
    let input = scenario_input();
    for result in sample_results() {
        let first = reconcile(&input, Some(&result));
        for _ in 0..5 {
            assert_eq!(reconcile(&input, Some(&result)), first);
        }
    }
}

#[test]
fn test_forced_labels_always_use_input() {
    let map = FieldLabelMap::global();
    let input = FormInput {
        evap_temp: -12.5,
        cond_temp: 41.0,
        superheat: 7.25,
        speed: 3600,
        ..scenario_input()
    };
    let result = results(json!({
        "Evaporation Temperature (°C)": 99,
        "Condenser Temperature (°C)": 99,
        "Superheat (°C)": 99,
        "Speed (RPM)": 99,
        "evap_temp": 99,
        "speed": 99
    }));

    let fields = reconcile(&input, Some(&result));

    for key in FORCED_INPUT_KEYS {
        assert_eq!(
            value_of(&fields, map.label(key)),
            Some(input.value(key).format().as_str()),
            "forced label {} took a result value",
            map.label(key)
        );
    }
    assert_eq!(value_of(&fields, "Speed (RPM)"), Some("3600.00"));
}

#[test]
fn test_excluded_keys_never_appear() {
    let map = FieldLabelMap::global();
    for result in sample_results() {
        let fields = reconcile(&scenario_input(), Some(&result));
        for key in EXCLUDED_KEYS {
            assert!(fields.iter().all(|f| f.label != map.label_for(key)));
        }
    }
}

#[test]
fn test_absent_result_uses_input_only() {
    let input = scenario_input();
    let fields = reconcile(&input, None);
    let map = FieldLabelMap::global();

    let expected: Vec<DisplayField> = input
        .entries()
        .map(|(key, value)| DisplayField::new(map.label(key), value.format()))
        .collect();
    assert_eq!(fields, expected);
}

#[test]
fn test_labels_are_unique() {
    for result in sample_results() {
        let fields = reconcile(&scenario_input(), Some(&result));
        let mut labels: Vec<_> = fields.iter().map(|f| f.label.as_str()).collect();
        labels.sort_unstable();
        let before = labels.len();
        labels.dedup();
        assert_eq!(labels.len(), before);
    }
}

#[test]
fn test_null_result_value_falls_back_to_input() {
    let result = results(json!({"Refrigerant": null}));
    let fields = reconcile(&scenario_input(), Some(&result));
    assert_eq!(value_of(&fields, "Refrigerant"), Some("Ammonia"));
}

#[test]
fn test_unmapped_result_key_without_value_gets_sentinel() {
    let result = results(json!({"Mass Flow": null}));
    let fields = reconcile(&scenario_input(), Some(&result));
    assert_eq!(value_of(&fields, "Mass Flow"), Some("-"));
}

#[test_case(json!(4.56789), "4.57" ; "float rounds to two decimals")]
#[test_case(json!(12), "12.00" ; "integer gets two decimals")]
#[test_case(json!(-0.005), "-0.01" ; "negative rounds")]
#[test_case(json!(0.125), "0.13" ; "positive tie rounds up")]
#[test_case(json!(-0.125), "-0.13" ; "negative tie rounds away from zero")]
#[test_case(json!(12.375), "12.38" ; "tie above one rounds up")]
#[test_case(json!(2.5), "2.50" ; "exact hundredths are kept")]
#[test_case(json!("n/a"), "n/a" ; "string passes through")]
#[test_case(json!("12.345"), "12.345" ; "numeric string is not reformatted")]
#[test_case(json!(true), "true" ; "boolean as json text")]
#[test_case(json!([1, 2]), "[1,2]" ; "array as json text")]
fn test_value_formatting(value: serde_json::Value, expected: &str) {
    let result = results(json!({ "Measured": value }));
    let fields = reconcile(&scenario_input(), Some(&result));
    assert_eq!(value_of(&fields, "Measured"), Some(expected));
}

#[test]
fn test_result_value_found_by_input_key() {
    let result = results(json!({"refrigerant": "R134a"}));
    let fields = reconcile(&scenario_input(), Some(&result));

    assert_eq!(value_of(&fields, "Refrigerant"), Some("R134a"));
    assert_eq!(fields.iter().filter(|f| f.label == "Refrigerant").count(), 1);
}

#[test]
fn test_resolve_model_prefers_result() {
    let input = scenario_input();
    assert_eq!(resolve_model(&input, None), Some(CompressorModel::Krs4115));

    let result = results(json!({"Compressor Model": "KRS3193"}));
    assert_eq!(resolve_model(&input, Some(&result)), Some(CompressorModel::Krs3193));

    let result = results(json!({"Compressor Model": ""}));
    assert_eq!(resolve_model(&input, Some(&result)), Some(CompressorModel::Krs4115));
}

#[test]
fn test_resolve_model_rejects_unknown_echo() {
    let input = scenario_input();
    for echoed in ["KRS9999", "krs4115", " KRS4115"] {
        let result = results(json!({ "Compressor Model": echoed }));
        assert_eq!(resolve_model(&input, Some(&result)), None, "echoed {echoed:?}");
    }
}
