//! Pricing-model classification.
//!
//! The whole derivation engine branches on two observations about a record:
//! does it carry a unit suffix, and does that suffix imply a recurring
//! billing cadence. Both collapse into one `PricingModel` tag computed here
//! and consumed by every section generator.

/// Unit substrings that mark a recurring billing cadence.
pub const RECURRING_MARKERS: [&str; 2] = ["month", "year"];

/// How a catalog entry is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingModel {
    /// No unit suffix: a flat one-time project or purchase cost.
    Flat,
    /// A unit suffix without a billing cadence (e.g. "per visit").
    PerUnit,
    /// A unit suffix containing "month" or "year".
    Recurring,
}

impl PricingModel {
    pub fn has_unit(self) -> bool {
        !matches!(self, PricingModel::Flat)
    }

    pub fn is_recurring(self) -> bool {
        matches!(self, PricingModel::Recurring)
    }
}

/// Classify a record's optional unit suffix.
pub fn classify_unit(unit: Option<&str>) -> PricingModel {
    match unit {
        None => PricingModel::Flat,
        Some(u) if RECURRING_MARKERS.iter().any(|m| u.contains(m)) => PricingModel::Recurring,
        Some(_) => PricingModel::PerUnit,
    }
}
