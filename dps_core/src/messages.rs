//! User-facing strings
//!
//! Every message a caller may show to an end user lives here so a translation
//! layer can swap the catalog without touching the formulas.

/// Raised when a damage source claims zero or several raid multiplier categories
pub const MULTIPLE_RAID_MULTIPLIERS: &str =
    "Attacks cannot benefit from more than one type of raid damage multiplier";

/// Marker printed next to talents the damage model cannot evaluate
pub const IMPERATIVE_TALENT: &str = "imperative talent";
