//! Core types shared by calculators and collaborators

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Level calculators are built at unless told otherwise
pub const DEFAULT_LEVEL: u32 = 85;

/// Additive stat fields on a stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Ap,
    Str,
    Agi,
    Haste,
    Crit,
    Mastery,
}

impl Stat {
    /// Get all additive stats
    pub fn all() -> &'static [Stat] {
        &[Stat::Ap, Stat::Str, Stat::Agi, Stat::Haste, Stat::Crit, Stat::Mastery]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Ap => "ap",
            Stat::Str => "str",
            Stat::Agi => "agi",
            Stat::Haste => "haste",
            Stat::Crit => "crit",
            Stat::Mastery => "mastery",
        }
    }
}

/// Hit and expertise channels that EP measures through the hit table
/// instead of by bumping a raw stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitProbe {
    WhiteHit,
    SpellHit,
    YellowHit,
    DodgeExp,
    ParryExp,
}

impl HitProbe {
    pub fn as_str(self) -> &'static str {
        match self {
            HitProbe::WhiteHit => "white_hit",
            HitProbe::SpellHit => "spell_hit",
            HitProbe::YellowHit => "yellow_hit",
            HitProbe::DodgeExp => "dodge_exp",
            HitProbe::ParryExp => "parry_exp",
        }
    }
}

/// Anything EP can be estimated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EpStat {
    Field(Stat),
    Hit(HitProbe),
}

impl EpStat {
    /// The stats `get_ep` reports, in report order
    pub const TRACKED: [EpStat; 10] = [
        EpStat::Hit(HitProbe::WhiteHit),
        EpStat::Hit(HitProbe::SpellHit),
        EpStat::Hit(HitProbe::YellowHit),
        EpStat::Field(Stat::Str),
        EpStat::Field(Stat::Agi),
        EpStat::Field(Stat::Haste),
        EpStat::Field(Stat::Crit),
        EpStat::Field(Stat::Mastery),
        EpStat::Hit(HitProbe::DodgeExp),
        EpStat::Hit(HitProbe::ParryExp),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EpStat::Field(stat) => stat.as_str(),
            EpStat::Hit(probe) => probe.as_str(),
        }
    }
}

impl From<Stat> for EpStat {
    fn from(stat: Stat) -> Self {
        EpStat::Field(stat)
    }
}

impl From<HitProbe> for EpStat {
    fn from(probe: HitProbe) -> Self {
        EpStat::Hit(probe)
    }
}

impl fmt::Display for EpStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EpStat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Weapon families; racial expertise keys off these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Dagger,
    OneHandSword,
    OneHandMace,
    OneHandAxe,
    FistWeapon,
    TwoHandSword,
    TwoHandMace,
    TwoHandAxe,
    Polearm,
    Staff,
    Bow,
    Gun,
    Crossbow,
    Thrown,
}

impl WeaponType {
    pub fn is_sword(self) -> bool {
        matches!(self, WeaponType::OneHandSword | WeaponType::TwoHandSword)
    }

    pub fn is_mace(self) -> bool {
        matches!(self, WeaponType::OneHandMace | WeaponType::TwoHandMace)
    }

    pub fn is_axe(self) -> bool {
        matches!(self, WeaponType::OneHandAxe | WeaponType::TwoHandAxe)
    }
}

/// An equipped weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(rename = "type")]
    pub weapon_type: WeaponType,
    /// Average damage per swing
    #[serde(default)]
    pub damage: f64,
    /// Swing timer in seconds
    #[serde(default = "default_weapon_speed")]
    pub speed: f64,
}

fn default_weapon_speed() -> f64 {
    2.6
}

impl Weapon {
    pub fn new(weapon_type: WeaponType, damage: f64, speed: f64) -> Self {
        Weapon {
            weapon_type,
            damage,
            speed,
        }
    }

    /// Unmodified damage per second from auto attacks
    pub fn dps(&self) -> f64 {
        if self.speed <= 0.0 {
            return 0.0;
        }
        self.damage / self.speed
    }
}

/// A temporary, activated stat increase (trinket on-use, racial cooldown)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBoost {
    pub name: String,
    pub stat: Stat,
    pub value: f64,
    /// Seconds the boost lasts
    pub duration: f64,
    /// Seconds between activations
    pub cooldown: f64,
}

impl StatBoost {
    pub fn new(name: impl Into<String>, stat: Stat, value: f64, duration: f64, cooldown: f64) -> Self {
        StatBoost {
            name: name.into(),
            stat,
            value,
            duration,
            cooldown,
        }
    }
}

/// Which raid damage multiplier a damage source benefits from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageCategory {
    Spell,
    Physical,
    Bleed,
}

/// Which avoidance outcomes the target can use against a swing
///
/// Most attacks by DPS come from behind and cannot be parried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avoidance {
    pub dodgeable: bool,
    pub parryable: bool,
}

impl Default for Avoidance {
    fn default() -> Self {
        Avoidance {
            dodgeable: true,
            parryable: false,
        }
    }
}

impl Avoidance {
    /// Attacking from the front: dodges and parries both apply
    pub fn from_front() -> Self {
        Avoidance {
            dodgeable: true,
            parryable: true,
        }
    }

    /// Neither dodge nor parry applies
    pub fn unavoidable() -> Self {
        Avoidance {
            dodgeable: false,
            parryable: false,
        }
    }
}

/// Glyph names, passed through untouched to concrete calculators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glyphs(BTreeSet<String>);

impl Glyphs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyph(mut self, name: impl Into<String>) -> Self {
        self.0.insert(name.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Glyphs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Glyphs(iter.into_iter().map(Into::into).collect())
    }
}
