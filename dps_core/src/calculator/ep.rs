//! Equivalence points
//!
//! EP is the DPS gained from one point of a stat, expressed in units of the
//! DPS gained from one point of attack power. Each stat is priced by a
//! forward difference against the unperturbed build.

use super::probe::{HitChannelProbe, StatProbe};
use super::DamageCalculator;
use crate::error::CalcError;
use crate::types::{EpStat, Stat};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, trace};

/// EP per tracked stat, in report order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpValues {
    values: Vec<(EpStat, f64)>,
}

impl EpValues {
    pub fn get(&self, stat: impl Into<EpStat>) -> Option<f64> {
        let stat = stat.into();
        self.values.iter().find(|(s, _)| *s == stat).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EpStat, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for EpValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (stat, value) in &self.values {
            map.serialize_entry(stat.as_str(), value)?;
        }
        map.end()
    }
}

/// Stat weights for every calculator
pub trait EpEstimation: DamageCalculator {
    /// DPS with one extra point of `stat`
    ///
    /// Additive stats are bumped on the stat block; hit and expertise
    /// channels are probed through the hit tables. Either way the build is
    /// back to its exact prior state when this returns, including on error.
    fn ep_helper(&mut self, stat: EpStat) -> Result<f64, CalcError> {
        let dps = match stat {
            EpStat::Field(field) => StatProbe::new(self, field, 1.0).get_dps(),
            EpStat::Hit(channel) => HitChannelProbe::new(self, channel).get_dps(),
        };
        trace!(stat = stat.as_str(), dps = ?dps, "ep probe");
        dps
    }

    /// EP for every tracked stat
    ///
    /// Fails with [`CalcError::ZeroAttackPowerDelta`] when attack power does
    /// not move DPS, and with the first probe error otherwise.
    fn get_ep(&mut self) -> Result<EpValues, CalcError> {
        let baseline = self.get_dps()?;
        let ap_delta = self.ep_helper(EpStat::Field(Stat::Ap))? - baseline;
        debug!(baseline, ap_delta, "estimating ep");
        if ap_delta == 0.0 {
            return Err(CalcError::ZeroAttackPowerDelta);
        }

        let mut values = Vec::with_capacity(EpStat::TRACKED.len());
        for stat in EpStat::TRACKED {
            let dps = self.ep_helper(stat)?;
            values.push((stat, (dps - baseline).abs() / ap_delta));
        }
        Ok(EpValues { values })
    }
}

impl<C: DamageCalculator + ?Sized> EpEstimation for C {}
