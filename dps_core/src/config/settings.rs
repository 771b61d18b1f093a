//! Calculator settings

use super::CalculatorConstants;
use serde::{Deserialize, Serialize};

/// Settings handed to a calculator
///
/// The core only reads `constants`. Everything else in the table is kept in
/// `extra` for concrete calculators (fight duration, rotation choices, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    #[serde(default)]
    pub constants: CalculatorConstants,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl CalculatorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(mut self, constants: CalculatorConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Store a class-specific setting
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.extra.get(key)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.extra.get(key)? {
            toml::Value::Float(v) => Some(*v),
            toml::Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_keeps_extra_keys() {
        let toml = r#"
duration = 300
cycle = "mutilate"

[constants]
base_dodge_chance = 0.05
"#;

        let settings: CalculatorSettings = toml::from_str(toml).unwrap();
        assert!((settings.constants.base_dodge_chance - 0.05).abs() < f64::EPSILON);
        assert_eq!(settings.get_f64("duration"), Some(300.0));
        assert_eq!(settings.get("cycle").and_then(|v| v.as_str()), Some("mutilate"));
        assert!(settings.get("constants").is_none());
    }

    #[test]
    fn test_builder() {
        let settings = CalculatorSettings::new().with_value("response_time", 0.5);
        assert_eq!(settings.get_f64("response_time"), Some(0.5));
        assert_eq!(settings.constants, CalculatorConstants::default());
    }
}
