//! Low-End / High-End Tier Breakdown
//!
//! Both tiers slice the record's range with fixed fractional offsets:
//! the low tier runs from the minimum up to `min + 0.25 * (max - min)`,
//! the high tier from `min + 0.7 * (max - min)` up to the maximum, which is
//! rendered open-ended with a trailing "+". The two bounds are computed
//! independently and may overlap for skewed data; that is documented
//! behavior, not a bug.

use crate::catalog::CostRecord;
use crate::format::{format_range, format_usd};
use crate::narrative::classify::PricingModel;
use crate::narrative::types::TierBreakdown;

/// Fraction of the range covered by the low tier.
pub const LOW_TIER_FRACTION: f64 = 0.25;

/// Fraction of the range below the high tier's lower bound.
pub const HIGH_TIER_FRACTION: f64 = 0.7;

pub fn low_end(record: &CostRecord, model: PricingModel) -> TierBreakdown {
    let span = record.max_cost - record.min_cost;
    let upper = (record.min_cost + span * LOW_TIER_FRACTION).round();
    let cost = format_range(record.min_cost, upper, record.unit.as_deref());

    let description = match model {
        PricingModel::Recurring => {
            "Basic tier with essential features and standard support. May have \
             limitations on usage, features, or customization. Good starting point for \
             those testing the service or with minimal requirements."
        }
        PricingModel::PerUnit => {
            "Entry-level service with standard features and limited customization. May \
             involve newer providers, basic packages, or promotional rates. Suitable for \
             straightforward needs without complex requirements."
        }
        PricingModel::Flat => {
            "Basic options with standard features, minimal customization, and \
             straightforward requirements. Often involves DIY elements, off-peak timing, \
             or newer providers building their portfolios. Suitable for budget-conscious \
             consumers with flexible expectations."
        }
    };

    TierBreakdown {
        cost,
        description: description.to_string(),
    }
}

pub fn high_end(record: &CostRecord, model: PricingModel) -> TierBreakdown {
    let span = record.max_cost - record.min_cost;
    let lower = (record.min_cost + span * HIGH_TIER_FRACTION).round();

    let cost = match record.unit.as_deref() {
        Some(unit) => format!(
            "{} to {}+ {}",
            format_usd(lower),
            format_usd(record.max_cost),
            unit
        ),
        None => format!("{} to {}+", format_usd(lower), format_usd(record.max_cost)),
    };

    let description = match model {
        PricingModel::Recurring => {
            "Full-featured tier with premium support, advanced features, and maximum \
             customization. Often includes dedicated account management, priority \
             service, and comprehensive coverage. Best for demanding requirements or \
             business-critical needs."
        }
        PricingModel::PerUnit => {
            "Premium service from highly experienced providers with proven track \
             records. Includes comprehensive deliverables, priority scheduling, and \
             exceptional attention to detail. Ideal for complex projects or when quality \
             is paramount."
        }
        PricingModel::Flat => {
            "Premium quality with top-tier materials, experienced professionals, and \
             comprehensive service. Includes custom features, expedited timelines, and \
             meticulous attention to detail. Best for those prioritizing quality and \
             long-term value over initial cost."
        }
    };

    TierBreakdown {
        cost,
        description: description.to_string(),
    }
}
