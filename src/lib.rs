//! Cost Explainer
//!
//! Renders static, SEO-oriented cost explainer pages from a flat JSON catalog.
//! Each catalog entry describes a topic's typical price range; a deterministic
//! derivation engine expands one entry into a full multi-section narrative
//! (direct answer, cost drivers, low/high tier breakdown, hidden costs,
//! worth-it verdict, FAQs).
//!
//! Module map:
//! - `format`: currency and range formatting
//! - `catalog`: catalog loading, validation, and lookup
//! - `narrative`: the derivation engine (classification + section generators)
//! - `listing`: homepage filtering and category grouping
//! - `web`: axum routes, askama page handlers, SEO surfaces

pub mod catalog;
pub mod format;
pub mod listing;
pub mod narrative;
pub mod web;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CostRecord};
pub use narrative::{NarrativeBlock, NarrativeGenerator, PricingModel};
pub use web::{create_router, AppState};
