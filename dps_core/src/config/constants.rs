//! Combat constants configuration

use serde::{Deserialize, Serialize};

/// Tunable combat-table constants
///
/// Defaults are for a raid boss three levels above a level 85 attacker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConstants {
    #[serde(default = "default_target_base_armor")]
    pub target_base_armor: f64,
    #[serde(default = "default_one_hand_miss_rate")]
    pub base_one_hand_miss_rate: f64,
    #[serde(default = "default_dw_miss_rate")]
    pub base_dw_miss_rate: f64,
    #[serde(default = "default_spell_miss_rate")]
    pub base_spell_miss_rate: f64,
    #[serde(default = "default_dodge_chance")]
    pub base_dodge_chance: f64,
    #[serde(default = "default_parry_chance")]
    pub base_parry_chance: f64,
    /// Fraction of auto attacks that glance
    #[serde(default = "default_glance_rate")]
    pub glance_rate: f64,
    /// Damage dealt by a glancing blow relative to a normal hit
    #[serde(default = "default_glance_multiplier")]
    pub glance_multiplier: f64,
}

impl Default for CalculatorConstants {
    fn default() -> Self {
        CalculatorConstants {
            target_base_armor: default_target_base_armor(),
            base_one_hand_miss_rate: default_one_hand_miss_rate(),
            base_dw_miss_rate: default_dw_miss_rate(),
            base_spell_miss_rate: default_spell_miss_rate(),
            base_dodge_chance: default_dodge_chance(),
            base_parry_chance: default_parry_chance(),
            glance_rate: default_glance_rate(),
            glance_multiplier: default_glance_multiplier(),
        }
    }
}

fn default_target_base_armor() -> f64 {
    11977.0
}
fn default_one_hand_miss_rate() -> f64 {
    0.08
}
fn default_dw_miss_rate() -> f64 {
    0.27
}
fn default_spell_miss_rate() -> f64 {
    0.17
}
fn default_dodge_chance() -> f64 {
    0.065
}
fn default_parry_chance() -> f64 {
    0.14
}
fn default_glance_rate() -> f64 {
    0.24
}
fn default_glance_multiplier() -> f64 {
    0.75
}

/// Get the bundled constants
pub fn default_constants() -> CalculatorConstants {
    let toml = include_str!("../../config/constants.toml");
    super::parse_toml(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = CalculatorConstants::default();
        assert!((constants.target_base_armor - 11977.0).abs() < f64::EPSILON);
        assert!((constants.base_dw_miss_rate - 0.27).abs() < f64::EPSILON);
        assert!((constants.glance_multiplier - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bundled_constants_match_defaults() {
        assert_eq!(default_constants(), CalculatorConstants::default());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
target_base_armor = 10000.0
base_dodge_chance = 0.05
"#;

        let constants: CalculatorConstants = toml::from_str(toml).unwrap();
        assert!((constants.target_base_armor - 10000.0).abs() < f64::EPSILON);
        assert!((constants.base_dodge_chance - 0.05).abs() < f64::EPSILON);
        // Untouched fields keep their defaults
        assert!((constants.base_parry_chance - 0.14).abs() < f64::EPSILON);
    }
}
