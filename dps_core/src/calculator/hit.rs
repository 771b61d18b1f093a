//! Hit tables
//!
//! Chances are fractions in [0, 1]. Each avoidance term (miss, dodge, parry)
//! is floored at zero on its own before they are summed.
//!
//! While an EP pass probes a hit or expertise channel the matching formulas
//! move by exactly one rating point, which is how EP prices those channels.

use super::DamageCalculator;
use crate::types::{Avoidance, HitProbe, Weapon, WeaponType};

/// Hit chance formulas available on every calculator
pub trait HitChance: DamageCalculator {
    /// Chance for a melee attack to land given a base miss rate
    fn melee_hit_chance(&self, base_miss_chance: f64, avoidance: Avoidance, weapon_type: WeaponType) -> f64 {
        let core = self.core();
        let stats = core.stats();
        let race = core.race();
        let constants = core.constants();

        let hit = stats.melee_hit_from_rating(None) + race.racial_hit() + self.melee_hit_from_talents();
        let miss = (base_miss_chance - hit).max(0.0);

        // Expertise here is the dodge/parry reduction, not the rating
        let expertise = stats.expertise_from_rating(None) + race.racial_expertise(weapon_type);
        let probing = core.calculating_ep();

        let dodge = if avoidance.dodgeable {
            let mut chance = (constants.base_dodge_chance - expertise).max(0.0);
            if probing == Some(HitProbe::DodgeExp) {
                chance += stats.expertise_from_rating(Some(1.0));
            }
            chance
        } else {
            0.0
        };

        let parry = if avoidance.parryable {
            let mut chance = (constants.base_parry_chance - expertise).max(0.0);
            if matches!(probing, Some(HitProbe::DodgeExp | HitProbe::ParryExp)) {
                chance += stats.expertise_from_rating(Some(1.0));
            }
            chance
        } else {
            0.0
        };

        1.0 - (miss + dodge + parry)
    }

    /// Main-hand special attack with a one-hand miss rate
    ///
    /// `weapon` defaults to the main hand.
    fn one_hand_melee_hit_chance(&self, avoidance: Avoidance, weapon: Option<&Weapon>) -> f64 {
        let weapon_type = weapon.unwrap_or_else(|| self.core().stats().main_hand()).weapon_type;
        one_hand_hit_chance(self, avoidance, weapon_type)
    }

    /// Off-hand special attack with a one-hand miss rate
    ///
    /// `weapon` defaults to the off hand.
    fn off_hand_melee_hit_chance(&self, avoidance: Avoidance, weapon: Option<&Weapon>) -> f64 {
        let weapon_type = weapon.unwrap_or_else(|| self.core().stats().off_hand()).weapon_type;
        one_hand_hit_chance(self, avoidance, weapon_type)
    }

    /// Main-hand auto attack while dual wielding
    fn dual_wield_mh_hit_chance(&self, avoidance: Avoidance) -> f64 {
        let weapon_type = self.core().stats().main_hand().weapon_type;
        self.dual_wield_hit_chance(avoidance, weapon_type)
    }

    /// Off-hand auto attack while dual wielding
    fn dual_wield_oh_hit_chance(&self, avoidance: Avoidance) -> f64 {
        let weapon_type = self.core().stats().off_hand().weapon_type;
        self.dual_wield_hit_chance(avoidance, weapon_type)
    }

    /// Auto attack with the dual-wield miss rate
    fn dual_wield_hit_chance(&self, avoidance: Avoidance, weapon_type: WeaponType) -> f64 {
        let core = self.core();
        let mut chance = self.melee_hit_chance(core.constants().base_dw_miss_rate, avoidance, weapon_type);
        if matches!(
            core.calculating_ep(),
            Some(HitProbe::YellowHit | HitProbe::SpellHit | HitProbe::WhiteHit)
        ) {
            chance -= core.stats().melee_hit_from_rating(Some(1.0));
        }
        chance
    }

    /// Chance for a spell to land
    fn spell_hit_chance(&self) -> f64 {
        let core = self.core();
        let stats = core.stats();
        let miss = core.constants().base_spell_miss_rate
            - stats.spell_hit_from_rating(None)
            - self.spell_hit_from_talents()
            - core.race().racial_hit();
        let mut chance = 1.0 - miss.max(0.0);
        if matches!(core.calculating_ep(), Some(HitProbe::YellowHit | HitProbe::SpellHit)) {
            chance -= stats.spell_hit_from_rating(Some(1.0));
        }
        chance
    }
}

impl<C: DamageCalculator + ?Sized> HitChance for C {}

fn one_hand_hit_chance<C: HitChance + ?Sized>(calc: &C, avoidance: Avoidance, weapon_type: WeaponType) -> f64 {
    let core = calc.core();
    let mut chance = calc.melee_hit_chance(core.constants().base_one_hand_miss_rate, avoidance, weapon_type);
    if core.calculating_ep() == Some(HitProbe::YellowHit) {
        chance -= core.stats().melee_hit_from_rating(Some(1.0));
    }
    chance
}
