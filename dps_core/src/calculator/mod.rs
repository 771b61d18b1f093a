//! DamageCalculator - the shared contract class-specific calculators build on
//!
//! A concrete calculator owns a [`CalculatorCore`] and implements
//! [`DamageCalculator::get_dps`]. Everything else comes for free through the
//! blanket extension traits:
//! - [`HitChance`]: miss/dodge/parry tables
//! - [`EpEstimation`]: stat weights by finite differences
//! - [`TalentRanking`]: per-talent DPS contribution

mod ep;
mod hit;
mod probe;
mod raid;
mod ranking;

pub use ep::{EpEstimation, EpValues};
pub use hit::HitChance;
pub use ranking::{TalentImpact, TalentRanking, TalentRankingReport};

use crate::config::{default_constants, CalculatorConstants, CalculatorSettings};
use crate::error::CalcError;
use crate::mitigation;
use crate::source::{BuffModel, RaceModel, StatModel, TalentModel};
use crate::types::{Glyphs, HitProbe, StatBoost, DEFAULT_LEVEL};
use tracing::debug;

/// State shared by every calculator: the build, the level cache and the EP mode flag
#[derive(Debug)]
pub struct CalculatorCore {
    stats: Box<dyn StatModel>,
    talents: Box<dyn TalentModel>,
    glyphs: Glyphs,
    buffs: Box<dyn BuffModel>,
    race: Box<dyn RaceModel>,
    settings: Option<CalculatorSettings>,
    constants: CalculatorConstants,

    level: u32,
    /// Always derived from `level`; only `set_level` writes it
    armor_mitigation_parameter: f64,
    /// Set only while an EP pass probes a hit/expertise channel
    calculating_ep: Option<HitProbe>,
}

impl CalculatorCore {
    /// Create a core at the default level with no settings
    pub fn new(
        stats: impl StatModel + 'static,
        talents: impl TalentModel + 'static,
        glyphs: Glyphs,
        buffs: impl BuffModel + 'static,
        race: impl RaceModel + 'static,
    ) -> Result<Self, CalcError> {
        Self::from_boxed(
            Box::new(stats),
            Box::new(talents),
            glyphs,
            Box::new(buffs),
            Box::new(race),
        )
    }

    /// Create a core from already-boxed collaborators
    pub fn from_boxed(
        stats: Box<dyn StatModel>,
        talents: Box<dyn TalentModel>,
        glyphs: Glyphs,
        buffs: Box<dyn BuffModel>,
        race: Box<dyn RaceModel>,
    ) -> Result<Self, CalcError> {
        let mut core = CalculatorCore {
            stats,
            talents,
            glyphs,
            buffs,
            race,
            settings: None,
            constants: default_constants(),
            level: DEFAULT_LEVEL,
            armor_mitigation_parameter: 0.0,
            calculating_ep: None,
        };
        core.set_level(DEFAULT_LEVEL)?;
        Ok(core)
    }

    /// Attach settings; their constants replace the bundled ones
    pub fn with_settings(mut self, settings: CalculatorSettings) -> Self {
        self.constants = settings.constants.clone();
        self.settings = Some(settings);
        self
    }

    /// Move the whole build to `level`
    pub fn with_level(mut self, level: u32) -> Result<Self, CalcError> {
        self.set_level(level)?;
        Ok(self)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Change level, cascading into stats, buffs and race and
    /// re-deriving the armor mitigation parameter
    ///
    /// Stats are updated first; if they reject the level nothing changes.
    pub fn set_level(&mut self, level: u32) -> Result<(), CalcError> {
        self.stats.set_level(level)?;
        self.buffs.set_level(level);
        self.race.set_level(level);
        self.level = level;
        self.armor_mitigation_parameter = mitigation::parameter(level);
        debug!(
            level,
            armor_mitigation_parameter = self.armor_mitigation_parameter,
            "calculator level set"
        );
        Ok(())
    }

    pub fn armor_mitigation_parameter(&self) -> f64 {
        self.armor_mitigation_parameter
    }

    /// The hit/expertise channel currently being probed, if any
    pub fn calculating_ep(&self) -> Option<HitProbe> {
        self.calculating_ep
    }

    pub(crate) fn set_calculating_ep(&mut self, probe: Option<HitProbe>) {
        self.calculating_ep = probe;
    }

    pub fn constants(&self) -> &CalculatorConstants {
        &self.constants
    }

    pub fn settings(&self) -> Option<&CalculatorSettings> {
        self.settings.as_ref()
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn stats(&self) -> &dyn StatModel {
        self.stats.as_ref()
    }

    pub fn stats_mut(&mut self) -> &mut dyn StatModel {
        self.stats.as_mut()
    }

    pub fn talents(&self) -> &dyn TalentModel {
        self.talents.as_ref()
    }

    pub fn talents_mut(&mut self) -> &mut dyn TalentModel {
        self.talents.as_mut()
    }

    pub fn buffs(&self) -> &dyn BuffModel {
        self.buffs.as_ref()
    }

    pub fn buffs_mut(&mut self) -> &mut dyn BuffModel {
        self.buffs.as_mut()
    }

    pub fn race(&self) -> &dyn RaceModel {
        self.race.as_ref()
    }

    /// Crit chance from raid buffs for melee attacks
    pub fn buff_melee_crit(&self) -> f64 {
        self.buffs.all_crit()
    }

    /// Crit chance from raid buffs and target debuffs for spells
    pub fn buff_spell_crit(&self) -> f64 {
        self.buffs.spell_crit() + self.buffs.all_crit()
    }

    /// Racial on-use boosts followed by gear on-use boosts
    pub fn all_activated_stat_boosts(&self) -> Vec<StatBoost> {
        let mut boosts = self.race.racial_stat_boosts();
        boosts.extend(self.stats.activated_boosts());
        boosts
    }
}

/// The contract every class-specific calculator implements
///
/// Only the accessors are required. `get_dps` has a default so a half-built
/// calculator still compiles, but calling it is a contract violation and
/// reports [`CalcError::NotImplemented`].
pub trait DamageCalculator {
    fn core(&self) -> &CalculatorCore;

    fn core_mut(&mut self) -> &mut CalculatorCore;

    /// Sustained damage per second for the current build
    ///
    /// Must be deterministic: two calls with no mutation in between return
    /// the same value, or EP and talent ranking are meaningless.
    fn get_dps(&self) -> Result<f64, CalcError> {
        Err(CalcError::NotImplemented("get_dps"))
    }

    /// Spell hit chance granted by talents
    fn spell_hit_from_talents(&self) -> f64 {
        0.0
    }

    /// Melee hit chance granted by talents
    fn melee_hit_from_talents(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::source::{dagger_pair, BuffSet, Race, RaceKind, Spec, StatBlock, TalentSet};

    /// A core around an empty night elf build with daggers
    pub(crate) fn bare_core() -> CalculatorCore {
        let (mh, oh) = dagger_pair();
        CalculatorCore::new(
            StatBlock::new(mh, oh),
            TalentSet::new(Default::default(), Spec::new("none")),
            Glyphs::new(),
            BuffSet::new(),
            Race::new(RaceKind::NightElf),
        )
        .unwrap()
    }

    /// Calculator that only carries a core and keeps every default
    pub(crate) struct Unimplemented(pub CalculatorCore);

    impl DamageCalculator for Unimplemented {
        fn core(&self) -> &CalculatorCore {
            &self.0
        }

        fn core_mut(&mut self) -> &mut CalculatorCore {
            &mut self.0
        }
    }
}
