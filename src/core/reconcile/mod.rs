//! Field reconciliation
//!
//! Merges the user's [`FormInput`] and the latest [`ResultSet`] into one
//! ordered list of [`DisplayField`]s:
//!
//! 1. Labels from the result keys come first (unmapped keys are used as-is),
//!    followed by the labels of every input parameter not already seen.
//! 2. Labels of [`EXCLUDED_KEYS`] are dropped.
//! 3. Values resolve as: forced input labels from the input; otherwise a
//!    defined result value; otherwise the input value; otherwise [`NO_VALUE`].
//! 4. Numbers are formatted with two decimals.
//!
//! The function is pure and total.

pub mod labels;

pub use labels::FieldLabelMap;

use crate::domain::{
    CompressorModel, DisplayField, FieldValue, FormInput, InputKey, ResultSet, MODEL_KEY,
    NO_VALUE,
};
use std::collections::HashSet;

/// Intermediate computation artifacts never shown to the user
pub const EXCLUDED_KEYS: [&str; 3] = ["h1", "h2", "h3"];

/// Operating parameters always taken from the user's input
pub const FORCED_INPUT_KEYS: [InputKey; 4] = [
    InputKey::EvapTemp,
    InputKey::CondTemp,
    InputKey::Superheat,
    InputKey::Speed,
];

/// Reconcile input and results into display fields
///
/// # Example
///
/// ```
/// use khione::core::reconcile::reconcile;
/// use khione::domain::FormInput;
///
/// let fields = reconcile(&FormInput::default(), None);
/// assert_eq!(fields[0].to_string(), "Compressor Model: KRS4115");
/// ```
pub fn reconcile(input: &FormInput, result: Option<&ResultSet>) -> Vec<DisplayField> {
    let map = FieldLabelMap::global();
    let excluded: HashSet<&str> = EXCLUDED_KEYS.iter().map(|k| map.label_for(k)).collect();

    let result_labels = result
        .into_iter()
        .flat_map(|r| r.keys())
        .map(|key| map.label_for(key));
    let input_labels = InputKey::ALL.into_iter().map(|key| map.label(key));

    let mut seen = HashSet::new();
    result_labels
        .chain(input_labels)
        .filter(|label| !excluded.contains(label))
        .filter(|label| seen.insert(*label))
        .map(|label| DisplayField::new(label, resolve(map, label, input, result)))
        .collect()
}

fn resolve(
    map: &FieldLabelMap,
    label: &str,
    input: &FormInput,
    result: Option<&ResultSet>,
) -> String {
    let key = map.key_for_label(label);
    let from_input = || key.map(|k| input.value(k).format());

    if key.is_some_and(|k| FORCED_INPUT_KEYS.contains(&k)) {
        return from_input().unwrap_or_else(|| NO_VALUE.to_string());
    }

    let from_result = result.and_then(|r| {
        r.get(label)
            .or_else(|| key.and_then(|k| r.get(k.as_str())))
            .and_then(FieldValue::from_json)
    });

    from_result
        .map(|v| v.format())
        .or_else(from_input)
        .unwrap_or_else(|| NO_VALUE.to_string())
}

/// Model whose reference image belongs in a report
///
/// A non-empty model echoed by the service wins over the input selection and
/// must name a known model exactly; anything else resolves to `None`.
pub fn resolve_model(input: &FormInput, result: Option<&ResultSet>) -> Option<CompressorModel> {
    match result.and_then(|r| r.text(MODEL_KEY)) {
        Some(echoed) => CompressorModel::ALL
            .into_iter()
            .find(|m| m.as_str() == echoed),
        None => Some(input.model),
    }
}
