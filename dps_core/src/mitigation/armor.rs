//! Armor - Physical damage reduction against a target's armor
//!
//! Reduction follows `armor / (armor + K)` where `K` depends only on the
//! attacker's level. `K` is what calculators cache as their
//! armor mitigation parameter.

/// Calculate the level-dependent armor constant `K`
///
/// The constant grows in three linear bands: slowly below level 60,
/// faster through level 80, and steeply above it.
pub fn parameter(level: u32) -> f64 {
    let level = level as f64;
    if level < 60.0 {
        400.0 + 85.0 * level
    } else if level <= 80.0 {
        467.5 * level - 22167.5
    } else {
        2167.5 * level - 158167.5
    }
}

/// Calculate the fraction of physical damage that gets through `armor`
///
/// # Arguments
/// * `armor` - The target's armor after debuffs
/// * `parameter` - The cached constant from [`parameter`]
pub fn multiplier(armor: f64, parameter: f64) -> f64 {
    1.0 - reduction(armor, parameter)
}

/// Calculate the fraction of physical damage absorbed by `armor`
fn reduction(armor: f64, parameter: f64) -> f64 {
    if armor <= 0.0 {
        return 0.0;
    }
    armor / (armor + parameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_at_85() {
        assert!((parameter(85) - 26070.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parameter_is_continuous_between_bands() {
        assert!((parameter(60) - (400.0 + 85.0 * 60.0 + 4.5 * 85.0)).abs() < 1e-9);
        assert!((parameter(60) - 5882.5).abs() < f64::EPSILON);
        assert!((parameter(80) - 15232.5).abs() < f64::EPSILON);
        assert!((parameter(81) - parameter(80) - 2167.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_armor() {
        assert!((multiplier(0.0, parameter(85)) - 1.0).abs() < f64::EPSILON);
        assert!((multiplier(-50.0, parameter(85)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boss_armor_at_85() {
        // 11977 / (11977 + 26070) = 31.48% reduction
        let mult = multiplier(11977.0, parameter(85));
        assert!((mult - 26070.0 / 38047.0).abs() < 1e-12);
    }

    #[test]
    fn test_more_armor_mitigates_more() {
        let k = parameter(85);
        assert!(multiplier(12000.0, k) < multiplier(6000.0, k));
    }
}
