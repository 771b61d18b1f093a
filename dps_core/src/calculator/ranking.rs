//! Talent ranking
//!
//! Each candidate talent is moved by one point (taken if empty, otherwise
//! reduced) and the DPS change against the untouched build is recorded.
//! Talents the damage model cannot evaluate are reported separately.

use super::probe::TalentProbe;
use super::DamageCalculator;
use crate::error::CalcError;
use crate::messages;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// DPS contribution of one talent point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentImpact {
    pub talent: String,
    /// Absolute DPS change; always positive
    pub dps_delta: f64,
}

/// Result of a ranking pass
///
/// Talents whose change left DPS untouched appear in neither list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TalentRankingReport {
    /// Talents that moved DPS, in candidate order
    pub ranking: Vec<TalentImpact>,
    /// Talents the damage model failed on
    pub not_implemented: Vec<String>,
}

impl TalentRankingReport {
    /// Ranked talents, biggest impact first; ties keep candidate order
    pub fn sorted(&self) -> Vec<&TalentImpact> {
        let mut sorted: Vec<&TalentImpact> = self.ranking.iter().collect();
        sorted.sort_by(|left, right| right.dps_delta.total_cmp(&left.dps_delta));
        sorted
    }

    pub fn get(&self, talent: &str) -> Option<f64> {
        self.ranking
            .iter()
            .find(|impact| impact.talent == talent)
            .map(|impact| impact.dps_delta)
    }

    pub fn is_not_implemented(&self, talent: &str) -> bool {
        self.not_implemented.iter().any(|t| t == talent)
    }
}

impl fmt::Display for TalentRankingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.ranking.iter().map(|i| i.talent.len()).max().unwrap_or(0);
        for impact in self.sorted() {
            let pad = width - impact.talent.len();
            writeln!(f, "{}:{} {:?}", impact.talent, " ".repeat(pad), impact.dps_delta)?;
        }
        for talent in &self.not_implemented {
            writeln!(f, "{}:  {}", talent, messages::IMPERATIVE_TALENT)?;
        }
        Ok(())
    }
}

/// Talent ranking for every calculator
pub trait TalentRanking: DamageCalculator {
    /// Talents the active specialization can take
    ///
    /// The first two tiers are open to everyone; deeper talents must be
    /// allowed by the active specialization.
    fn candidate_talents(&self) -> Result<Vec<String>, CalcError> {
        let talents = self.core().talents();
        let mut candidates = Vec::new();
        for talent in talents.talents() {
            if talents.tier(&talent)? <= 2 || talents.allowed_in_spec(&talent) {
                candidates.push(talent);
            }
        }
        Ok(candidates)
    }

    /// Rank `list`, or every candidate talent when `list` is `None`
    ///
    /// Errors from the unperturbed build and from point lookups are returned.
    /// Errors while a talent is perturbed mark it as not implemented.
    fn get_ranking_for_talents(&mut self, list: Option<&[String]>) -> Result<TalentRankingReport, CalcError> {
        let baseline = self.get_dps()?;
        let candidates = match list {
            Some(list) => list.to_vec(),
            None => self.candidate_talents()?,
        };
        debug!(baseline, candidates = candidates.len(), "ranking talents");

        let mut report = TalentRankingReport::default();
        for talent in &candidates {
            let original = self.core().talents().points(talent)?;
            let perturbed = if original == 0 { 1 } else { original - 1 };

            let dps = TalentProbe::new(self, talent, perturbed).get_dps();
            match dps {
                Ok(dps) => {
                    let delta = (dps - baseline).abs();
                    trace!(talent = %talent, perturbed, delta, "talent probe");
                    if delta != 0.0 {
                        report.ranking.push(TalentImpact {
                            talent: talent.clone(),
                            dps_delta: delta,
                        });
                    }
                }
                Err(err) => {
                    debug!(talent = %talent, error = %err, "talent not modeled");
                    report.not_implemented.push(talent.clone());
                }
            }
        }
        Ok(report)
    }
}

impl<C: DamageCalculator + ?Sized> TalentRanking for C {}
