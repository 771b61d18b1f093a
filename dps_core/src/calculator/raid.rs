//! Raid buff and debuff damage multipliers

use super::CalculatorCore;
use crate::error::CalcError;
use crate::messages;
use crate::mitigation;
use crate::types::DamageCategory;

impl DamageCategory {
    /// Resolve the boolean attack-type flags; exactly one must be set
    pub fn from_flags(is_spell: bool, is_physical: bool, is_bleed: bool) -> Result<Self, CalcError> {
        match (is_spell, is_physical, is_bleed) {
            (true, false, false) => Ok(DamageCategory::Spell),
            (false, true, false) => Ok(DamageCategory::Physical),
            (false, false, true) => Ok(DamageCategory::Bleed),
            _ => Err(CalcError::InvalidInput(
                messages::MULTIPLE_RAID_MULTIPLIERS.to_string(),
            )),
        }
    }
}

impl CalculatorCore {
    /// Target armor after armor debuffs
    ///
    /// `armor` overrides the boss's base armor.
    pub fn target_armor(&self, armor: Option<f64>) -> f64 {
        let armor = armor.unwrap_or(self.constants().target_base_armor);
        self.buffs().armor_reduction_multiplier() * armor
    }

    /// Fraction of physical damage left after `armor`, at the current level
    pub fn armor_mitigation_multiplier(&self, armor: f64) -> f64 {
        mitigation::multiplier(armor, self.armor_mitigation_parameter())
    }

    /// Raw physical damage reduced by `armor`
    pub fn armor_mitigate(&self, damage: f64, armor: f64) -> f64 {
        damage * self.armor_mitigation_multiplier(armor)
    }

    /// Raid multiplier for one damage category
    ///
    /// Physical damage also goes through armor mitigation against the
    /// debuffed target armor.
    pub fn raid_modifier(&self, category: DamageCategory, armor: Option<f64>) -> f64 {
        let buffs = self.buffs();
        match category {
            DamageCategory::Spell => buffs.spell_damage_multiplier(),
            DamageCategory::Bleed => buffs.bleed_damage_multiplier(),
            DamageCategory::Physical => {
                buffs.physical_damage_multiplier() * self.armor_mitigation_multiplier(self.target_armor(armor))
            }
        }
    }

    /// Raid multiplier for an attack described by flags
    ///
    /// Every damage formula goes through this. Fails with
    /// [`CalcError::InvalidInput`] unless exactly one flag is set.
    pub fn raid_settings_modifiers(
        &self,
        is_spell: bool,
        is_physical: bool,
        is_bleed: bool,
        armor: Option<f64>,
    ) -> Result<f64, CalcError> {
        let category = DamageCategory::from_flags(is_spell, is_physical, is_bleed)?;
        Ok(self.raid_modifier(category, armor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::test_support::bare_core;
    use crate::source::{Buff, BuffSet, Race, RaceKind, Spec, StatBlock, TalentSet};
    use crate::types::Glyphs;

    const EPSILON: f64 = 1e-9;

    fn raided_core() -> CalculatorCore {
        let (mh, oh) = crate::source::dagger_pair();
        CalculatorCore::new(
            StatBlock::new(mh, oh),
            TalentSet::new(Default::default(), Spec::default()),
            Glyphs::new(),
            BuffSet::full_raid(),
            Race::new(RaceKind::Human),
        )
        .unwrap()
    }

    #[test]
    fn test_flag_combinations() {
        let core = bare_core();
        for bits in 0u8..8 {
            let (spell, physical, bleed) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let result = core.raid_settings_modifiers(spell, physical, bleed, None);
            if bits.count_ones() == 1 {
                assert!(result.is_ok(), "flags {bits:03b} should be accepted");
            } else {
                match result {
                    Err(CalcError::InvalidInput(msg)) => {
                        assert_eq!(msg, messages::MULTIPLE_RAID_MULTIPLIERS)
                    }
                    other => panic!("flags {bits:03b} gave {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_spell_and_bleed_use_buff_multipliers() {
        let core = raided_core();
        let spell = core.raid_settings_modifiers(true, false, false, None).unwrap();
        let bleed = core.raid_settings_modifiers(false, false, true, None).unwrap();
        assert!((spell - 1.08).abs() < EPSILON);
        assert!((bleed - 1.30).abs() < EPSILON);
    }

    #[test]
    fn test_physical_includes_debuffed_armor() {
        let core = raided_core();
        let armor = 11977.0 * 0.88;
        let expected = 1.04 * (1.0 - armor / (armor + mitigation::parameter(85)));
        let physical = core.raid_settings_modifiers(false, true, false, None).unwrap();
        assert!((physical - expected).abs() < EPSILON);
    }

    #[test]
    fn test_armor_override() {
        let core = bare_core();
        assert!((core.target_armor(Some(5000.0)) - 5000.0).abs() < EPSILON);
        assert!((core.target_armor(None) - 11977.0).abs() < EPSILON);
        // Zero armor means no mitigation
        let physical = core.raid_modifier(DamageCategory::Physical, Some(0.0));
        assert!((physical - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_armor_debuff_scales_override() {
        let mut buffs = BuffSet::new();
        buffs.add(Buff::ArmorDebuff);
        let (mh, oh) = crate::source::dagger_pair();
        let core = CalculatorCore::new(
            StatBlock::new(mh, oh),
            TalentSet::default(),
            Glyphs::new(),
            buffs,
            Race::new(RaceKind::Human),
        )
        .unwrap();
        assert!((core.target_armor(Some(10000.0)) - 8800.0).abs() < EPSILON);
    }

    #[test]
    fn test_armor_mitigate_follows_level() {
        let mut core = bare_core();
        let at_85 = core.armor_mitigate(1000.0, 10000.0);
        core.set_level(80).unwrap();
        let at_80 = core.armor_mitigate(1000.0, 10000.0);
        // Lower level attackers get less out of the same armor
        assert!(at_80 < at_85);
        let expected = 1000.0 * (1.0 - 10000.0 / (10000.0 + mitigation::parameter(80)));
        assert!((at_80 - expected).abs() < EPSILON);
    }
}
