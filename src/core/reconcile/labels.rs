//! Bidirectional parameter key / display label table

use crate::domain::InputKey;
use std::collections::HashMap;
use std::sync::OnceLock;

const LABELS: [(InputKey, &str); 6] = [
    (InputKey::Model, "Compressor Model"),
    (InputKey::Refrigerant, "Refrigerant"),
    (InputKey::EvapTemp, "Evaporation Temperature (°C)"),
    (InputKey::CondTemp, "Condenser Temperature (°C)"),
    (InputKey::Superheat, "Superheat (°C)"),
    (InputKey::Speed, "Speed (RPM)"),
];

/// Fixed mapping between [`InputKey`]s and their display labels
///
/// Built once and queried in both directions. Every input key has exactly
/// one label and labels are unique.
#[derive(Debug)]
pub struct FieldLabelMap {
    by_key: HashMap<InputKey, &'static str>,
    by_wire_key: HashMap<&'static str, &'static str>,
    by_label: HashMap<&'static str, InputKey>,
}

impl FieldLabelMap {
    fn build() -> Self {
        let mut by_key = HashMap::with_capacity(LABELS.len());
        let mut by_wire_key = HashMap::with_capacity(LABELS.len());
        let mut by_label = HashMap::with_capacity(LABELS.len());
        for (key, label) in LABELS {
            by_key.insert(key, label);
            by_wire_key.insert(key.as_str(), label);
            by_label.insert(label, key);
        }
        Self {
            by_key,
            by_wire_key,
            by_label,
        }
    }

    /// Shared instance
    pub fn global() -> &'static FieldLabelMap {
        static MAP: OnceLock<FieldLabelMap> = OnceLock::new();
        MAP.get_or_init(Self::build)
    }

    /// Label of an input key
    pub fn label(&self, key: InputKey) -> &'static str {
        // LABELS covers every InputKey variant
        self.by_key.get(&key).copied().unwrap_or_else(|| key.as_str())
    }

    /// Label for an arbitrary key, the key itself when unmapped
    pub fn label_for<'a>(&self, key: &'a str) -> &'a str {
        match self.by_wire_key.get(key) {
            Some(label) => *label,
            None => key,
        }
    }

    /// Input key behind a label, if the label belongs to an input parameter
    pub fn key_for_label(&self, label: &str) -> Option<InputKey> {
        self.by_label.get(label).copied()
    }
}
