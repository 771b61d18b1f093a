//! StatBlock - Gear statistics with level-dependent rating conversions

use crate::error::CalcError;
use crate::source::StatModel;
use crate::types::{Stat, StatBoost, Weapon, DEFAULT_LEVEL};
use serde::{Deserialize, Serialize};

/// Rating needed for one unit of each combat rating at a given level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingConversions {
    /// Melee hit rating per 1% hit
    pub melee_hit: f64,
    /// Spell hit rating per 1% hit
    pub spell_hit: f64,
    /// Expertise rating per expertise point
    pub expertise: f64,
}

/// Dodge/parry reduction per expertise point
const EXPERTISE_PER_POINT: f64 = 0.0025;

impl RatingConversions {
    const LEVEL_85: RatingConversions = RatingConversions {
        melee_hit: 120.109,
        spell_hit: 102.446,
        expertise: 30.0272,
    };

    /// Look up conversions for `level`
    pub fn for_level(level: u32) -> Result<Self, CalcError> {
        let (melee_hit, spell_hit, expertise) = match level {
            60 => (9.37931, 8.0, 2.34483),
            70 => (15.7692, 12.6154, 3.94231),
            80 => (30.7548, 26.232, 7.68869),
            85 => return Ok(Self::LEVEL_85),
            _ => return Err(CalcError::UnsupportedLevel(level)),
        };
        Ok(RatingConversions {
            melee_hit,
            spell_hit,
            expertise,
        })
    }

    /// Levels with conversion data
    pub fn supported_levels() -> &'static [u32] {
        &[60, 70, 80, 85]
    }
}

/// On-use gear effects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GearBuffs {
    #[serde(default)]
    pub boosts: Vec<StatBoost>,
}

impl GearBuffs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boost(mut self, boost: StatBoost) -> Self {
        self.boosts.push(boost);
        self
    }

    pub fn all_activated_boosts(&self) -> Vec<StatBoost> {
        self.boosts.clone()
    }
}

/// Character gear stats
#[derive(Debug, Clone, PartialEq)]
pub struct StatBlock {
    level: u32,
    conversions: RatingConversions,

    // === Additive stats ===
    pub ap: f64,
    pub strength: f64,
    pub agility: f64,
    pub haste: f64,
    pub crit: f64,
    pub mastery: f64,

    // === Ratings converted through the level table ===
    pub hit: f64,
    pub expertise: f64,

    // === Weapons ===
    pub mh: Weapon,
    pub oh: Weapon,

    pub gear_buffs: GearBuffs,
}

impl StatBlock {
    /// Create an empty stat block at the default level
    pub fn new(mh: Weapon, oh: Weapon) -> Self {
        StatBlock {
            level: DEFAULT_LEVEL,
            conversions: RatingConversions::LEVEL_85,
            ap: 0.0,
            strength: 0.0,
            agility: 0.0,
            haste: 0.0,
            crit: 0.0,
            mastery: 0.0,
            hit: 0.0,
            expertise: 0.0,
            mh,
            oh,
            gear_buffs: GearBuffs::default(),
        }
    }

    /// Set an additive stat
    pub fn with_stat(mut self, stat: Stat, value: f64) -> Self {
        self.set_stat(stat, value);
        self
    }

    pub fn with_hit_rating(mut self, rating: f64) -> Self {
        self.hit = rating;
        self
    }

    pub fn with_expertise_rating(mut self, rating: f64) -> Self {
        self.expertise = rating;
        self
    }

    pub fn with_gear_buffs(mut self, gear_buffs: GearBuffs) -> Self {
        self.gear_buffs = gear_buffs;
        self
    }

    pub fn conversions(&self) -> RatingConversions {
        self.conversions
    }
}

impl StatModel for StatBlock {
    fn level(&self) -> u32 {
        self.level
    }

    fn set_level(&mut self, level: u32) -> Result<(), CalcError> {
        self.conversions = RatingConversions::for_level(level)?;
        self.level = level;
        Ok(())
    }

    fn main_hand(&self) -> &Weapon {
        &self.mh
    }

    fn off_hand(&self) -> &Weapon {
        &self.oh
    }

    fn activated_boosts(&self) -> Vec<StatBoost> {
        self.gear_buffs.all_activated_boosts()
    }

    fn melee_hit_from_rating(&self, rating: Option<f64>) -> f64 {
        rating.unwrap_or(self.hit) / (self.conversions.melee_hit * 100.0)
    }

    fn expertise_from_rating(&self, rating: Option<f64>) -> f64 {
        rating.unwrap_or(self.expertise) / self.conversions.expertise * EXPERTISE_PER_POINT
    }

    fn spell_hit_from_rating(&self, rating: Option<f64>) -> f64 {
        rating.unwrap_or(self.hit) / (self.conversions.spell_hit * 100.0)
    }

    fn stat(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Ap => self.ap,
            Stat::Str => self.strength,
            Stat::Agi => self.agility,
            Stat::Haste => self.haste,
            Stat::Crit => self.crit,
            Stat::Mastery => self.mastery,
        }
    }

    fn set_stat(&mut self, stat: Stat, value: f64) {
        let field = match stat {
            Stat::Ap => &mut self.ap,
            Stat::Str => &mut self.strength,
            Stat::Agi => &mut self.agility,
            Stat::Haste => &mut self.haste,
            Stat::Crit => &mut self.crit,
            Stat::Mastery => &mut self.mastery,
        };
        *field = value;
    }
}
