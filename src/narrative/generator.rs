//! Narrative Generator
//!
//! Main entry point for the derivation engine. Classifies the record once
//! and fans out to the seven section generators.
//!
//! Public API (consumed by the web handlers and tests):
//! - `NarrativeGenerator::new() -> Self`
//! - `NarrativeGenerator::derive(&CostRecord) -> NarrativeBlock`

use crate::catalog::CostRecord;
use crate::narrative::classify::classify_unit;
use crate::narrative::sections::{
    cost_drivers, direct_answer, faqs, hidden_costs, price_tiers, worth_it,
};
use crate::narrative::types::NarrativeBlock;

/// Stateless narrative generator.
#[derive(Debug, Default)]
pub struct NarrativeGenerator;

impl NarrativeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Derive the full narrative block for one record.
    ///
    /// Pure: two calls with the same record yield identical blocks. Record
    /// validity (non-negative, ordered bounds) is the catalog's contract,
    /// not checked here.
    pub fn derive(&self, record: &CostRecord) -> NarrativeBlock {
        let model = classify_unit(record.unit.as_deref());

        NarrativeBlock {
            direct_answer: direct_answer::generate(record, model),
            cost_drivers: cost_drivers::generate(model),
            low_end: price_tiers::low_end(record, model),
            high_end: price_tiers::high_end(record, model),
            hidden_costs: hidden_costs::generate(model),
            worth_it: worth_it::generate(record, model),
            faqs: faqs::generate(record, model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(unit: Option<&str>) -> CostRecord {
        CostRecord {
            slug: "a-bathroom-remodel".to_string(),
            topic: "a bathroom remodel".to_string(),
            title: "How Much Does a Bathroom Remodel Really Cost?".to_string(),
            min_cost: 6_000.0,
            max_cost: 15_000.0,
            unit: unit.map(String::from),
            category: "Home Improvement".to_string(),
        }
    }

    #[test]
    fn test_derivation_is_pure() {
        let generator = NarrativeGenerator::new();
        let r = record(None);
        assert_eq!(generator.derive(&r), generator.derive(&r));
    }

    #[test]
    fn test_all_sections_populated() {
        let generator = NarrativeGenerator::new();
        let block = generator.derive(&record(Some("per month")));

        assert!(!block.direct_answer.is_empty());
        assert_eq!(block.cost_drivers.len(), 6);
        assert!(!block.low_end.cost.is_empty());
        assert!(!block.high_end.cost.is_empty());
        assert_eq!(block.hidden_costs.len(), 5);
        assert!(!block.worth_it.is_empty());
        assert_eq!(block.faqs.len(), 5);
    }
}
