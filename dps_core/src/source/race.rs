//! Race - Racial hit, weapon expertise and on-use abilities

use crate::source::RaceModel;
use crate::types::{Stat, StatBoost, WeaponType, DEFAULT_LEVEL};
use serde::{Deserialize, Serialize};

/// Dodge/parry reduction from the 3 racial expertise points
const RACIAL_EXPERTISE: f64 = 0.0075;

/// Playable races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceKind {
    Human,
    Dwarf,
    NightElf,
    Gnome,
    Draenei,
    Worgen,
    Orc,
    Undead,
    Tauren,
    Troll,
    BloodElf,
    Goblin,
}

/// A character's race at a level
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub kind: RaceKind,
    level: u32,
}

impl Race {
    pub fn new(kind: RaceKind) -> Self {
        Race {
            kind,
            level: DEFAULT_LEVEL,
        }
    }

    fn blood_fury_ap(&self) -> f64 {
        match self.level {
            85 => 1170.0,
            80 => 584.0,
            level => 1170.0 * level as f64 / 85.0,
        }
    }
}

impl RaceModel for Race {
    fn level(&self) -> u32 {
        self.level
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn racial_stat_boosts(&self) -> Vec<StatBoost> {
        match self.kind {
            RaceKind::Orc => vec![StatBoost::new(
                "Blood Fury",
                Stat::Ap,
                self.blood_fury_ap(),
                15.0,
                120.0,
            )],
            RaceKind::Troll => vec![StatBoost::new("Berserking", Stat::Haste, 0.20, 10.0, 180.0)],
            _ => Vec::new(),
        }
    }

    fn racial_hit(&self) -> f64 {
        match self.kind {
            RaceKind::Draenei => 0.01,
            _ => 0.0,
        }
    }

    fn racial_expertise(&self, weapon_type: WeaponType) -> f64 {
        let specialized = match self.kind {
            RaceKind::Human => weapon_type.is_sword() || weapon_type.is_mace(),
            RaceKind::Dwarf => weapon_type.is_mace(),
            RaceKind::Orc => weapon_type.is_axe() || weapon_type == WeaponType::FistWeapon,
            RaceKind::Gnome => matches!(weapon_type, WeaponType::Dagger | WeaponType::OneHandSword),
            _ => false,
        };
        if specialized {
            RACIAL_EXPERTISE
        } else {
            0.0
        }
    }
}
