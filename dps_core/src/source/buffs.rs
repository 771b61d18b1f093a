//! BuffSet - Raid buffs on the player and debuffs on the target

use crate::source::BuffModel;
use crate::types::DEFAULT_LEVEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raid-wide buff or target debuff categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Buff {
    /// +5% crit chance for everything
    CritChanceBuff,
    /// +5% spell crit chance taken by the target
    SpellCritDebuff,
    /// -12% target armor
    ArmorDebuff,
    /// +8% spell damage taken
    SpellDamageDebuff,
    /// +30% bleed damage taken
    BleedDamageDebuff,
    /// +4% physical damage taken
    PhysicalVulnerabilityDebuff,
}

impl Buff {
    pub fn all() -> &'static [Buff] {
        &[
            Buff::CritChanceBuff,
            Buff::SpellCritDebuff,
            Buff::ArmorDebuff,
            Buff::SpellDamageDebuff,
            Buff::BleedDamageDebuff,
            Buff::PhysicalVulnerabilityDebuff,
        ]
    }
}

/// Active buffs and debuffs
#[derive(Debug, Clone, PartialEq)]
pub struct BuffSet {
    level: u32,
    active: BTreeSet<Buff>,
}

impl Default for BuffSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BuffSet {
    /// Create an empty buff set
    pub fn new() -> Self {
        BuffSet {
            level: DEFAULT_LEVEL,
            active: BTreeSet::new(),
        }
    }

    /// Every buff and debuff active
    pub fn full_raid() -> Self {
        Buff::all().iter().copied().collect()
    }

    pub fn with_buff(mut self, buff: Buff) -> Self {
        self.active.insert(buff);
        self
    }

    pub fn add(&mut self, buff: Buff) {
        self.active.insert(buff);
    }

    pub fn remove(&mut self, buff: Buff) {
        self.active.remove(&buff);
    }

    pub fn has(&self, buff: Buff) -> bool {
        self.active.contains(&buff)
    }

    fn pick(&self, buff: Buff, active: f64, inactive: f64) -> f64 {
        if self.has(buff) {
            active
        } else {
            inactive
        }
    }
}

impl FromIterator<Buff> for BuffSet {
    fn from_iter<I: IntoIterator<Item = Buff>>(iter: I) -> Self {
        BuffSet {
            level: DEFAULT_LEVEL,
            active: iter.into_iter().collect(),
        }
    }
}

impl BuffModel for BuffSet {
    fn level(&self) -> u32 {
        self.level
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn all_crit(&self) -> f64 {
        self.pick(Buff::CritChanceBuff, 0.05, 0.0)
    }

    fn spell_crit(&self) -> f64 {
        self.pick(Buff::SpellCritDebuff, 0.05, 0.0)
    }

    fn armor_reduction_multiplier(&self) -> f64 {
        self.pick(Buff::ArmorDebuff, 0.88, 1.0)
    }

    fn spell_damage_multiplier(&self) -> f64 {
        self.pick(Buff::SpellDamageDebuff, 1.08, 1.0)
    }

    fn bleed_damage_multiplier(&self) -> f64 {
        self.pick(Buff::BleedDamageDebuff, 1.30, 1.0)
    }

    fn physical_damage_multiplier(&self) -> f64 {
        self.pick(Buff::PhysicalVulnerabilityDebuff, 1.04, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffs_are_neutral() {
        let buffs = BuffSet::new();
        assert!((buffs.all_crit() - 0.0).abs() < f64::EPSILON);
        assert!((buffs.armor_reduction_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((buffs.spell_damage_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((buffs.bleed_damage_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((buffs.physical_damage_multiplier() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_raid() {
        let buffs = BuffSet::full_raid();
        assert!((buffs.all_crit() - 0.05).abs() < f64::EPSILON);
        assert!((buffs.spell_crit() - 0.05).abs() < f64::EPSILON);
        assert!((buffs.armor_reduction_multiplier() - 0.88).abs() < f64::EPSILON);
        assert!((buffs.bleed_damage_multiplier() - 1.30).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_remove() {
        let mut buffs = BuffSet::new().with_buff(Buff::ArmorDebuff);
        assert!(buffs.has(Buff::ArmorDebuff));
        buffs.remove(Buff::ArmorDebuff);
        buffs.add(Buff::SpellDamageDebuff);
        assert!(!buffs.has(Buff::ArmorDebuff));
        assert!((buffs.spell_damage_multiplier() - 1.08).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_is_stored() {
        let mut buffs = BuffSet::new();
        buffs.set_level(80);
        assert_eq!(buffs.level(), 80);
    }
}
