//! Operating parameters entered by the user
//!
//! [`FormInput`] is the user-editable side of a calculation. It is always fully
//! defined (see [`FormInput::default`]) and is only changed through
//! [`FormInput::apply_edit`] or by constructing a new value.

use super::errors::KhioneError;
use super::field::FieldValue;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compressor models offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompressorModel {
    Krs4115,
    Krs4133,
    Krs4150,
    Krs4170,
    Krs4195,
    Krs4225,
    Krs3145,
    Krs3165,
    Krs3193,
}

impl CompressorModel {
    /// All models, in the order they are offered to the user
    pub const ALL: [CompressorModel; 9] = [
        CompressorModel::Krs4115,
        CompressorModel::Krs4133,
        CompressorModel::Krs4150,
        CompressorModel::Krs4170,
        CompressorModel::Krs4195,
        CompressorModel::Krs4225,
        CompressorModel::Krs3145,
        CompressorModel::Krs3165,
        CompressorModel::Krs3193,
    ];

    /// Model identifier as used in asset names and service payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressorModel::Krs4115 => "KRS4115",
            CompressorModel::Krs4133 => "KRS4133",
            CompressorModel::Krs4150 => "KRS4150",
            CompressorModel::Krs4170 => "KRS4170",
            CompressorModel::Krs4195 => "KRS4195",
            CompressorModel::Krs4225 => "KRS4225",
            CompressorModel::Krs3145 => "KRS3145",
            CompressorModel::Krs3165 => "KRS3165",
            CompressorModel::Krs3193 => "KRS3193",
        }
    }
}

impl fmt::Display for CompressorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressorModel {
    type Err = KhioneError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KhioneError::Validation(format!("Unknown compressor model: {s}")))
    }
}

/// Refrigerants supported by the calculation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Refrigerant {
    Ammonia,
    R134a,
    #[serde(rename = "R404A")]
    R404a,
    #[serde(rename = "R410A")]
    R410a,
    R1234yf,
    #[serde(rename = "CO2")]
    Co2,
}

impl Refrigerant {
    pub const ALL: [Refrigerant; 6] = [
        Refrigerant::Ammonia,
        Refrigerant::R134a,
        Refrigerant::R404a,
        Refrigerant::R410a,
        Refrigerant::R1234yf,
        Refrigerant::Co2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Refrigerant::Ammonia => "Ammonia",
            Refrigerant::R134a => "R134a",
            Refrigerant::R404a => "R404A",
            Refrigerant::R410a => "R410A",
            Refrigerant::R1234yf => "R1234yf",
            Refrigerant::Co2 => "CO2",
        }
    }
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Refrigerant {
    type Err = KhioneError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KhioneError::Validation(format!("Unknown refrigerant: {s}")))
    }
}

/// Keys of the [`FormInput`] parameters, in payload order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Model,
    Refrigerant,
    EvapTemp,
    CondTemp,
    Superheat,
    Speed,
}

impl InputKey {
    pub const ALL: [InputKey; 6] = [
        InputKey::Model,
        InputKey::Refrigerant,
        InputKey::EvapTemp,
        InputKey::CondTemp,
        InputKey::Superheat,
        InputKey::Speed,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKey::Model => "model",
            InputKey::Refrigerant => "refrigerant",
            InputKey::EvapTemp => "evap_temp",
            InputKey::CondTemp => "cond_temp",
            InputKey::Superheat => "superheat",
            InputKey::Speed => "speed",
        }
    }
}

impl FromStr for InputKey {
    type Err = KhioneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| KhioneError::Validation(format!("Unknown input parameter: {s}")))
    }
}

/// Operating parameters for one calculation
///
/// Serializes to the flat payload expected by the calculation endpoint.
/// Missing members deserialize to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub model: CompressorModel,
    pub refrigerant: Refrigerant,
    /// Evaporation temperature in °C
    pub evap_temp: f64,
    /// Condenser temperature in °C
    pub cond_temp: f64,
    /// Superheat in °C
    pub superheat: f64,
    /// Compressor speed in RPM
    pub speed: u32,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            model: CompressorModel::Krs4115,
            refrigerant: Refrigerant::Ammonia,
            evap_temp: 10.0,
            cond_temp: 30.0,
            superheat: 0.0,
            speed: 2980,
        }
    }
}

impl FormInput {
    /// Value of one parameter as a reconcilable field value
    pub fn value(&self, key: InputKey) -> FieldValue {
        match key {
            InputKey::Model => FieldValue::Text(self.model.as_str().to_string()),
            InputKey::Refrigerant => FieldValue::Text(self.refrigerant.as_str().to_string()),
            InputKey::EvapTemp => FieldValue::Number(self.evap_temp),
            InputKey::CondTemp => FieldValue::Number(self.cond_temp),
            InputKey::Superheat => FieldValue::Number(self.superheat),
            InputKey::Speed => FieldValue::Number(f64::from(self.speed)),
        }
    }

    /// Iterate over every parameter in payload order
    pub fn entries(&self) -> impl Iterator<Item = (InputKey, FieldValue)> + '_ {
        InputKey::ALL.into_iter().map(move |key| (key, self.value(key)))
    }

    /// Apply one raw user edit
    ///
    /// The raw text is read as a number for numeric parameters and as an
    /// identifier for the model and refrigerant. On error the input is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown keys, unknown identifiers or
    /// text that is not a valid number for the parameter.
    pub fn apply_edit(&mut self, key: &str, raw: &str) -> Result<()> {
        let key = InputKey::from_str(key)?;
        match key {
            InputKey::Model => self.model = raw.parse()?,
            InputKey::Refrigerant => self.refrigerant = raw.parse()?,
            InputKey::EvapTemp => self.evap_temp = parse_number(key, raw)?,
            InputKey::CondTemp => self.cond_temp = parse_number(key, raw)?,
            InputKey::Superheat => self.superheat = parse_number(key, raw)?,
            InputKey::Speed => self.speed = parse_speed(raw)?,
        }
        tracing::debug!(key = key.as_str(), value = raw, "Input updated");
        Ok(())
    }
}

fn parse_number(key: InputKey, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            KhioneError::Validation(format!("{} must be a number, got '{raw}'", key.as_str()))
        })
}

fn parse_speed(raw: &str) -> Result<u32> {
    let value = parse_number(InputKey::Speed, raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(KhioneError::Validation(format!(
            "speed must be a whole number of RPM, got '{raw}'"
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let input = FormInput::default();
        assert_eq!(input.model, CompressorModel::Krs4115);
        assert_eq!(input.refrigerant, Refrigerant::Ammonia);
        assert_eq!(input.evap_temp, 10.0);
        assert_eq!(input.cond_temp, 30.0);
        assert_eq!(input.superheat, 0.0);
        assert_eq!(input.speed, 2980);
    }

    #[test]
    fn test_payload_is_flat_and_ordered() {
        let json = serde_json::to_string(&FormInput::default()).unwrap();
        assert_eq!(
            json,
            r#"{"model":"KRS4115","refrigerant":"Ammonia","evap_temp":10.0,"cond_temp":30.0,"superheat":0.0,"speed":2980}"#
        );
    }

    #[test]
    fn test_refrigerant_wire_names() {
        for refrigerant in Refrigerant::ALL {
            let json = serde_json::to_value(refrigerant).unwrap();
            assert_eq!(json, serde_json::json!(refrigerant.as_str()));
        }
    }

    #[test]
    fn test_model_from_str_case_insensitive() {
        assert_eq!(
            "krs3193".parse::<CompressorModel>().unwrap(),
            CompressorModel::Krs3193
        );
        assert!("KRS9999".parse::<CompressorModel>().is_err());
    }

    #[test]
    fn test_apply_edit_numeric() {
        let mut input = FormInput::default();
        input.apply_edit("evap_temp", "-12.5").unwrap();
        input.apply_edit("speed", "3550").unwrap();
        assert_eq!(input.evap_temp, -12.5);
        assert_eq!(input.speed, 3550);
    }

    #[test]
    fn test_apply_edit_enum() {
        let mut input = FormInput::default();
        input.apply_edit("refrigerant", "R404A").unwrap();
        input.apply_edit("model", "KRS4225").unwrap();
        assert_eq!(input.refrigerant, Refrigerant::R404a);
        assert_eq!(input.model, CompressorModel::Krs4225);
    }

    #[test]
    fn test_apply_edit_rejects_and_leaves_input_untouched() {
        let mut input = FormInput::default();
        assert!(input.apply_edit("cond_temp", "warm").is_err());
        assert!(input.apply_edit("speed", "2980.5").is_err());
        assert!(input.apply_edit("pressure", "1").is_err());
        assert!(input.apply_edit("refrigerant", "Water").is_err());
        assert_eq!(input, FormInput::default());
    }

    #[test]
    fn test_entries_cover_every_key() {
        let input = FormInput::default();
        let keys: Vec<_> = input.entries().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["model", "refrigerant", "evap_temp", "cond_temp", "superheat", "speed"]
        );
        assert_eq!(input.value(InputKey::Speed), FieldValue::Number(2980.0));
    }
}
