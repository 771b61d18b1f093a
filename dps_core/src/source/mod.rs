//! Collaborator models - traits the calculator consumes, plus reference implementations

mod buffs;
mod race;
mod stats;
mod talents;

pub use buffs::{Buff, BuffSet};
pub use race::{Race, RaceKind};
pub use stats::{GearBuffs, RatingConversions, StatBlock};
pub use talents::{Spec, TalentDef, TalentSet, TalentTree};

use crate::error::CalcError;
use crate::types::{Stat, StatBoost, Weapon, WeaponType};
use std::fmt::Debug;

/// Number of talent trees every class has
pub const TREE_COUNT: usize = 3;

/// Gear statistics and rating conversions
pub trait StatModel: Debug {
    fn level(&self) -> u32;

    /// Switch rating conversions to `level`; rejects levels without conversion data
    fn set_level(&mut self, level: u32) -> Result<(), CalcError>;

    fn main_hand(&self) -> &Weapon;

    fn off_hand(&self) -> &Weapon;

    /// On-use boosts granted by gear (trinkets, engineering tinkers)
    fn activated_boosts(&self) -> Vec<StatBoost>;

    /// Melee hit chance from `rating` points, or from the block's own rating on `None`
    fn melee_hit_from_rating(&self, rating: Option<f64>) -> f64;

    /// Dodge/parry reduction from `rating` expertise points, or the block's own on `None`
    fn expertise_from_rating(&self, rating: Option<f64>) -> f64;

    /// Spell hit chance from `rating` points, or from the block's own rating on `None`
    fn spell_hit_from_rating(&self, rating: Option<f64>) -> f64;

    /// Read an additive stat field
    fn stat(&self, stat: Stat) -> f64;

    /// Overwrite an additive stat field
    fn set_stat(&mut self, stat: Stat, value: f64);
}

/// Talent allocation across the class's trees
pub trait TalentModel: Debug {
    /// Every talent the class has, once each, in tree order then declaration order
    fn talents(&self) -> Vec<String>;

    /// Points currently allocated to `talent`
    fn points(&self, talent: &str) -> Result<u32, CalcError>;

    /// Points allocated to `talent` in tree `tree` only
    fn tree_points(&self, tree: usize, talent: &str) -> Result<u32, CalcError>;

    /// Row of `talent` within its tree (1-based)
    fn tier(&self, talent: &str) -> Result<u32, CalcError>;

    /// Whether the active specialization may take `talent` beyond the open tiers
    fn allowed_in_spec(&self, talent: &str) -> bool;

    /// Allocate `points` to `talent` in tree `tree`; fails when the tree lacks the talent
    fn set_talent(&mut self, tree: usize, talent: &str, points: u32) -> Result<(), CalcError>;
}

/// Raid buffs and target debuffs
pub trait BuffModel: Debug {
    fn level(&self) -> u32;

    fn set_level(&mut self, level: u32);

    /// Additive crit chance for every attack type
    fn all_crit(&self) -> f64;

    /// Additive crit chance for spells only
    fn spell_crit(&self) -> f64;

    /// Multiplier applied to the target's armor
    fn armor_reduction_multiplier(&self) -> f64;

    fn spell_damage_multiplier(&self) -> f64;

    fn bleed_damage_multiplier(&self) -> f64;

    fn physical_damage_multiplier(&self) -> f64;
}

/// Racial abilities
pub trait RaceModel: Debug {
    fn level(&self) -> u32;

    fn set_level(&mut self, level: u32);

    /// On-use racial boosts
    fn racial_stat_boosts(&self) -> Vec<StatBoost>;

    /// Racial hit chance, as a fraction
    fn racial_hit(&self) -> f64;

    /// Dodge/parry reduction the race gets with `weapon_type`, as a fraction
    fn racial_expertise(&self, weapon_type: WeaponType) -> f64;
}

/// Shorthand for a main-hand/off-hand dagger pair
#[cfg(test)]
pub(crate) fn dagger_pair() -> (Weapon, Weapon) {
    (
        Weapon::new(WeaponType::Dagger, 1000.0, 1.8),
        Weapon::new(WeaponType::Dagger, 1000.0, 1.8),
    )
}
