//! Character build configuration
//!
//! A build file describes everything a calculator needs: level, race, gear
//! stats, weapons, talents, buffs, glyphs and optional settings.

use super::{CalculatorSettings, ConfigError};
use crate::calculator::CalculatorCore;
use crate::error::CalcError;
use crate::source::{Buff, BuffSet, GearBuffs, Race, RaceKind, StatBlock, TalentSet};
use crate::types::{Glyphs, Weapon, DEFAULT_LEVEL};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gear stats section of a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub ap: f64,
    #[serde(default, rename = "str")]
    pub strength: f64,
    #[serde(default, rename = "agi")]
    pub agility: f64,
    #[serde(default)]
    pub haste: f64,
    #[serde(default)]
    pub crit: f64,
    #[serde(default)]
    pub mastery: f64,
    /// Hit rating
    #[serde(default)]
    pub hit: f64,
    /// Expertise rating
    #[serde(default)]
    pub expertise: f64,
    pub mh: Weapon,
    pub oh: Weapon,
    #[serde(default)]
    pub gear_buffs: GearBuffs,
}

impl StatsConfig {
    fn into_stat_block(self) -> StatBlock {
        let mut block = StatBlock::new(self.mh, self.oh)
            .with_hit_rating(self.hit)
            .with_expertise_rating(self.expertise)
            .with_gear_buffs(self.gear_buffs);
        block.ap = self.ap;
        block.strength = self.strength;
        block.agility = self.agility;
        block.haste = self.haste;
        block.crit = self.crit;
        block.mastery = self.mastery;
        block
    }
}

/// A whole character build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_level")]
    pub level: u32,
    pub race: RaceKind,
    #[serde(default)]
    pub glyphs: Glyphs,
    #[serde(default)]
    pub buffs: Vec<Buff>,
    pub stats: StatsConfig,
    pub talents: TalentSet,
    #[serde(default)]
    pub settings: Option<CalculatorSettings>,
}

fn default_level() -> u32 {
    DEFAULT_LEVEL
}

impl BuildConfig {
    /// Check values serde can't
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (hand, weapon) in [("mh", &self.stats.mh), ("oh", &self.stats.oh)] {
            if weapon.speed <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} weapon speed must be positive, got {}",
                    hand, weapon.speed
                )));
            }
        }
        for tree in &self.talents.trees {
            for talent in &tree.talents {
                if talent.points > talent.max_points {
                    return Err(ConfigError::ValidationError(format!(
                        "{} has {} points but takes at most {}",
                        talent.name, talent.points, talent.max_points
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build a calculator core at the configured level
    pub fn into_core(self) -> Result<CalculatorCore, CalcError> {
        self.validate()?;
        let buffs: BuffSet = self.buffs.into_iter().collect();
        let core = CalculatorCore::new(
            self.stats.into_stat_block(),
            self.talents,
            self.glyphs,
            buffs,
            Race::new(self.race),
        )?
        .with_level(self.level)?;
        Ok(match self.settings {
            Some(settings) => core.with_settings(settings),
            None => core,
        })
    }
}

/// Load a build from a TOML file
pub fn load_build(path: &Path) -> Result<BuildConfig, ConfigError> {
    let build: BuildConfig = super::load_toml(path)?;
    build.validate()?;
    Ok(build)
}

/// Load a build from a TOML string
pub fn parse_build(content: &str) -> Result<BuildConfig, ConfigError> {
    let build: BuildConfig = super::parse_toml(content)?;
    build.validate()?;
    Ok(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TalentModel;
    use crate::types::{Stat, WeaponType};

    const BUILD: &str = r#"
level = 80
race = "human"
glyphs = ["mutilate", "backstab"]
buffs = ["armor_debuff", "bleed_damage_debuff"]

[stats]
ap = 4000.0
agi = 1500.0
hit = 300.0
expertise = 50.0
mh = { type = "one_hand_sword", damage = 900.0, speed = 2.6 }
oh = { type = "dagger", damage = 700.0, speed = 1.8 }

[[talents.trees]]
name = "assassination"
talents = [
    { name = "lethality", tier = 1, max_points = 3, points = 3 },
    { name = "cold_blood", tier = 3, max_points = 1 },
]

[[talents.trees]]
name = "combat"

[[talents.trees]]
name = "subtlety"

[talents.spec]
name = "assassination"
allowed_talents = ["cold_blood"]

[settings]
duration = 300

[settings.constants]
target_base_armor = 10000.0
"#;

    #[test]
    fn test_parse_build() {
        let build = parse_build(BUILD).unwrap();
        assert_eq!(build.level, 80);
        assert_eq!(build.race, RaceKind::Human);
        assert!(build.glyphs.has("mutilate"));
        assert_eq!(build.stats.mh.weapon_type, WeaponType::OneHandSword);
        assert!((build.stats.agility - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_into_core() {
        let core = parse_build(BUILD).unwrap().into_core().unwrap();
        assert_eq!(core.level(), 80);
        assert_eq!(core.stats().level(), 80);
        assert!((core.stats().stat(Stat::Ap) - 4000.0).abs() < f64::EPSILON);
        assert_eq!(core.talents().points("lethality").unwrap(), 3);
        assert!(core.talents().allowed_in_spec("cold_blood"));
        assert!((core.buffs().bleed_damage_multiplier() - 1.30).abs() < f64::EPSILON);
        assert!((core.constants().target_base_armor - 10000.0).abs() < f64::EPSILON);
        assert_eq!(core.settings().and_then(|s| s.get_f64("duration")), Some(300.0));
    }

    #[test]
    fn test_defaults() {
        let toml = r#"
race = "orc"

[stats]
mh = { type = "one_hand_axe", damage = 900.0 }
oh = { type = "fist_weapon", damage = 900.0 }

[talents]
trees = [{ name = "a" }, { name = "b" }, { name = "c" }]
"#;
        let core = parse_build(toml).unwrap().into_core().unwrap();
        assert_eq!(core.level(), DEFAULT_LEVEL);
        assert!(core.settings().is_none());
        assert!((core.stats().main_hand().speed - 2.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_zero_speed() {
        let toml = BUILD.replace("speed = 1.8", "speed = 0.0");
        let err = parse_build(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_overspent_talent() {
        let toml = BUILD.replace("max_points = 3, points = 3", "max_points = 3, points = 4");
        let err = parse_build(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_unsupported_level() {
        let toml = BUILD.replace("level = 80", "level = 83");
        let err = parse_build(&toml).unwrap().into_core().unwrap_err();
        assert!(matches!(err, CalcError::UnsupportedLevel(83)));
    }

    #[test]
    fn test_load_build_missing_file() {
        let err = load_build(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
