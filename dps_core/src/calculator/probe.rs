//! Scoped perturbations
//!
//! Each guard applies a change to the calculator when built and undoes it
//! when dropped, so the build is restored on normal return, on `?` and on
//! unwinding. Guards deref to the calculator, so `probe.get_dps()` evaluates
//! the perturbed build.

use super::DamageCalculator;
use crate::source::TREE_COUNT;
use crate::types::{HitProbe, Stat};
use std::array;
use std::ops::Deref;

/// Adds `delta` to a stat field; restores the saved baseline on drop
pub(crate) struct StatProbe<'a, C: DamageCalculator + ?Sized> {
    calc: &'a mut C,
    stat: Stat,
    baseline: f64,
}

impl<'a, C: DamageCalculator + ?Sized> StatProbe<'a, C> {
    pub(crate) fn new(calc: &'a mut C, stat: Stat, delta: f64) -> Self {
        let baseline = calc.core().stats().stat(stat);
        calc.core_mut().stats_mut().set_stat(stat, baseline + delta);
        StatProbe {
            calc,
            stat,
            baseline,
        }
    }
}

impl<C: DamageCalculator + ?Sized> Deref for StatProbe<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.calc
    }
}

impl<C: DamageCalculator + ?Sized> Drop for StatProbe<'_, C> {
    fn drop(&mut self) {
        self.calc
            .core_mut()
            .stats_mut()
            .set_stat(self.stat, self.baseline);
    }
}

/// Switches the hit table into probing `probe`; clears the flag on drop
pub(crate) struct HitChannelProbe<'a, C: DamageCalculator + ?Sized> {
    calc: &'a mut C,
}

impl<'a, C: DamageCalculator + ?Sized> HitChannelProbe<'a, C> {
    pub(crate) fn new(calc: &'a mut C, probe: HitProbe) -> Self {
        calc.core_mut().set_calculating_ep(Some(probe));
        HitChannelProbe { calc }
    }
}

impl<C: DamageCalculator + ?Sized> Deref for HitChannelProbe<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.calc
    }
}

impl<C: DamageCalculator + ?Sized> Drop for HitChannelProbe<'_, C> {
    fn drop(&mut self) {
        self.calc.core_mut().set_calculating_ep(None);
    }
}

/// Sets a talent to new points in every tree that has it; puts each tree's
/// own points back on drop
///
/// Assignments a tree rejects (over its maximum) are ignored, in both
/// directions.
pub(crate) struct TalentProbe<'a, C: DamageCalculator + ?Sized> {
    calc: &'a mut C,
    talent: &'a str,
    saved: [Option<u32>; TREE_COUNT],
}

impl<'a, C: DamageCalculator + ?Sized> TalentProbe<'a, C> {
    pub(crate) fn new(calc: &'a mut C, talent: &'a str, points: u32) -> Self {
        let talents = calc.core().talents();
        let saved: [Option<u32>; TREE_COUNT] = array::from_fn(|tree| talents.tree_points(tree, talent).ok());

        let talents = calc.core_mut().talents_mut();
        for (tree, _) in saved.iter().enumerate().filter(|(_, owned)| owned.is_some()) {
            let _ = talents.set_talent(tree, talent, points);
        }
        TalentProbe { calc, talent, saved }
    }
}

impl<C: DamageCalculator + ?Sized> Deref for TalentProbe<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.calc
    }
}

impl<C: DamageCalculator + ?Sized> Drop for TalentProbe<'_, C> {
    fn drop(&mut self) {
        let talents = self.calc.core_mut().talents_mut();
        for (tree, points) in self.saved.iter().enumerate() {
            if let Some(points) = points {
                let _ = talents.set_talent(tree, self.talent, *points);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::test_support::{bare_core, Unimplemented};
    use crate::source::{TalentDef, TalentTree};
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_stat_probe_restores_on_drop() {
        let mut calc = Unimplemented(bare_core());
        calc.0.stats_mut().set_stat(Stat::Agi, 0.1);
        {
            let probe = StatProbe::new(&mut calc, Stat::Agi, 1.0);
            assert!((probe.core().stats().stat(Stat::Agi) - 1.1).abs() < 1e-12);
        }
        // Exact baseline, not 0.1 + 1.0 - 1.0
        assert_eq!(calc.0.stats().stat(Stat::Agi).to_bits(), 0.1f64.to_bits());
    }

    #[test]
    fn test_stat_probe_restores_on_panic() {
        let mut calc = Unimplemented(bare_core());
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _probe = StatProbe::new(&mut calc, Stat::Haste, 1.0);
            panic!("get_dps blew up");
        }));
        assert!(result.is_err());
        assert!((calc.0.stats().stat(Stat::Haste) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_channel_probe_clears_flag() {
        let mut calc = Unimplemented(bare_core());
        {
            let probe = HitChannelProbe::new(&mut calc, HitProbe::ParryExp);
            assert_eq!(probe.core().calculating_ep(), Some(HitProbe::ParryExp));
        }
        assert_eq!(calc.0.calculating_ep(), None);
    }

    #[test]
    fn test_talent_guard_restores_each_tree() {
        use crate::calculator::CalculatorCore;
        use crate::source::{BuffSet, Race, RaceKind, Spec, StatBlock, TalentSet};
        use crate::types::Glyphs;

        let (mh, oh) = crate::source::dagger_pair();
        let talents = TalentSet::new(
            [
                TalentTree::new("a").with_talent(TalentDef::new("shared", 1, 3).with_points(2)),
                TalentTree::new("b"),
                TalentTree::new("c").with_talent(TalentDef::new("shared", 1, 3).with_points(1)),
            ],
            Spec::default(),
        );
        let core = CalculatorCore::new(
            StatBlock::new(mh, oh),
            talents,
            Glyphs::new(),
            BuffSet::new(),
            Race::new(RaceKind::Human),
        )
        .unwrap();
        let mut calc = Unimplemented(core);

        {
            let probe = TalentProbe::new(&mut calc, "shared", 3);
            assert_eq!(probe.core().talents().tree_points(0, "shared").unwrap(), 3);
            assert_eq!(probe.core().talents().tree_points(2, "shared").unwrap(), 3);
        }
        let talents = calc.0.talents();
        assert_eq!(talents.tree_points(0, "shared").unwrap(), 2);
        assert!(talents.tree_points(1, "shared").is_err());
        assert_eq!(talents.tree_points(2, "shared").unwrap(), 1);
    }
}
