//! Section generators for the derivation engine.
//!
//! Each module exposes a pure `generate` (or a low/high pair for the price
//! tiers) taking the record and the precomputed `PricingModel`.

pub mod cost_drivers;
pub mod direct_answer;
pub mod faqs;
pub mod hidden_costs;
pub mod price_tiers;
pub mod worth_it;
