//! Narrative Derivation Engine
//!
//! Expands one `CostRecord` into the full set of derived page content.
//! Derivation is a pure function of the record: identical input always
//! yields an identical `NarrativeBlock` (no randomness, no hidden state).
//!
//! ## Sections
//! 1. Direct Answer - the formatted range plus a fixed framing sentence
//! 2. Cost Drivers - universal drivers plus pricing-model-specific ones
//! 3. Low-End Tier - bottom quarter of the range with descriptive text
//! 4. High-End Tier - top 30% of the range, open-ended ("+")
//! 5. Hidden Costs - recurring vs. one-time fee lists
//! 6. Worth-It Verdict - one paragraph keyed on billing cadence
//! 7. FAQs - exactly five question/answer pairs in a fixed order
//!
//! Every generator branches on the same classification, computed once per
//! record in `classify` and passed down as a `PricingModel`.

pub mod classify;
pub mod generator;
pub mod sections;
pub mod types;

pub use classify::{classify_unit, PricingModel};
pub use generator::NarrativeGenerator;
pub use types::{Faq, NarrativeBlock, TierBreakdown};
