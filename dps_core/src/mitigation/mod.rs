//! Armor mitigation - level-dependent physical damage reduction

mod armor;

pub use armor::{multiplier, parameter};
