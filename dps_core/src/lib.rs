//! dps_core - Base damage calculation engine for character builds
//!
//! This library provides:
//! - DamageCalculator: the contract class calculators implement (`get_dps`)
//! - Hit tables: miss/dodge/parry chances with EP probing
//! - Raid multipliers: buff/debuff composition and armor mitigation
//! - EP estimation: stat weights by finite differences
//! - Talent ranking: per-talent DPS contribution
//! - Reference collaborators: stat block, talent trees, buffs, races

pub mod calculator;
pub mod config;
pub mod error;
pub mod messages;
pub mod mitigation;
pub mod prelude;
pub mod source;
pub mod types;

// Re-export core types for convenience
pub use calculator::{
    CalculatorCore, DamageCalculator, EpEstimation, EpValues, HitChance, TalentImpact, TalentRanking,
    TalentRankingReport,
};
pub use config::{load_build, parse_build, BuildConfig, CalculatorConstants, CalculatorSettings, ConfigError};
pub use error::CalcError;
pub use source::{BuffModel, BuffSet, Race, RaceKind, RaceModel, StatBlock, StatModel, TalentModel, TalentSet};
pub use types::{Avoidance, DamageCategory, EpStat, Glyphs, HitProbe, Stat, StatBoost, Weapon, WeaponType};
