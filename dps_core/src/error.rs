//! Error types for damage calculation

use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised by calculators and their collaborators
#[derive(Error, Debug)]
pub enum CalcError {
    /// Caller passed arguments that violate a formula's preconditions.
    /// The message is user-facing and comes from [`crate::messages`].
    #[error("{0}")]
    InvalidInput(String),

    /// An overridable operation was called without being implemented
    #[error("{0} is not implemented for this calculator")]
    NotImplemented(&'static str),

    #[error("Unknown talent: {0}")]
    UnknownTalent(String),

    #[error("Talent {talent} does not exist in the {tree} tree")]
    TalentNotInTree { talent: String, tree: String },

    #[error("Talent {talent} takes at most {max} points, got {points}")]
    TooManyPoints { talent: String, points: u32, max: u32 },

    /// A damage model was asked to evaluate a talent it does not model
    #[error("Talent {0} is not modeled")]
    UnmodeledTalent(String),

    #[error("No rating conversions for level {0}")]
    UnsupportedLevel(u32),

    /// One extra attack power did not move DPS, so EP cannot be normalized
    #[error("Attack power has no effect on DPS; EP values cannot be normalized")]
    ZeroAttackPowerDelta,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
