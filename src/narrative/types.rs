//! Shared types for derived narrative content.
//!
//! All types are `Serialize`: they feed the askama page templates, the JSON
//! API responses, and the FAQPage structured data.

use serde::Serialize;

/// One price tier (low or high end) with its descriptive text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierBreakdown {
    pub cost: String,
    pub description: String,
}

/// One question/answer pair for the FAQ section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// The full set of derived prose for one cost record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeBlock {
    pub direct_answer: String,
    pub cost_drivers: Vec<String>,
    pub low_end: TierBreakdown,
    pub high_end: TierBreakdown,
    pub hidden_costs: Vec<String>,
    pub worth_it: String,
    /// Always exactly five entries, in a fixed meaningful order.
    pub faqs: Vec<Faq>,
}
