//! Prelude module for convenient imports
//!
//! ```rust
//! use dps_core::prelude::*;
//! ```

// Calculator contract and derived metrics
pub use crate::calculator::{
    CalculatorCore, DamageCalculator, EpEstimation, EpValues, HitChance, TalentRanking, TalentRankingReport,
};

// Core types
pub use crate::types::{Avoidance, DamageCategory, EpStat, Glyphs, HitProbe, Stat, Weapon, WeaponType};

// Collaborators
pub use crate::source::{
    Buff, BuffModel, BuffSet, Race, RaceKind, RaceModel, Spec, StatBlock, StatModel, TalentDef, TalentModel,
    TalentSet, TalentTree,
};

// Errors and config
pub use crate::config::{parse_build, BuildConfig, CalculatorSettings};
pub use crate::error::CalcError;
