//! Catalog loading and lookup.
//!
//! The catalog is a flat JSON file holding an ordered sequence of cost
//! records, read wholesale at startup. Records have no lifecycle beyond
//! read: no create/update/delete, no caching contract.
//!
//! Malformed entries (negative minimum, `min_cost > max_cost`, blank or
//! duplicate slugs) are rejected here at load time with a descriptive error
//! so the derivation engine never sees invalid data.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON")]
    Parse(#[from] serde_json::Error),

    #[error("invalid record '{slug}': {reason}")]
    InvalidRecord { slug: String, reason: String },

    #[error("duplicate slug '{0}'")]
    DuplicateSlug(String),
}

/// One catalog item describing a topic's price range and metadata.
///
/// Field names follow the camelCase JSON produced by the content pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    /// URL-safe token, unique across the catalog.
    pub slug: String,
    /// Lowercase-normalized human label (e.g. "a bathroom remodel").
    pub topic: String,
    /// Display title with its own capitalization.
    pub title: String,
    pub min_cost: f64,
    pub max_cost: f64,
    /// Optional pricing unit (e.g. "per month", "per visit"). Presence marks
    /// a unit-priced item rather than a flat one-time cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Free-text grouping label.
    pub category: String,
}

/// In-memory catalog: the full ordered record list plus slug lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CostRecord>,
}

impl Catalog {
    /// Load and validate the catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<CostRecord> = serde_json::from_str(&contents)?;
        Self::from_records(records)
    }

    /// Build a catalog from pre-parsed records, validating each one.
    pub fn from_records(records: Vec<CostRecord>) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();
        for record in &records {
            validate(record)?;
            if !seen.insert(record.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
        }
        Ok(Self { records })
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[CostRecord] {
        &self.records
    }

    /// Look up one record by slug. Absent slugs yield `None`, never a panic.
    pub fn get(&self, slug: &str) -> Option<&CostRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(record: &CostRecord) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidRecord {
        slug: record.slug.clone(),
        reason: reason.to_string(),
    };

    if record.slug.trim().is_empty() {
        return Err(CatalogError::InvalidRecord {
            slug: "<blank>".to_string(),
            reason: "slug must not be empty".to_string(),
        });
    }
    if record.min_cost < 0.0 {
        return Err(invalid("min_cost must be non-negative"));
    }
    if record.min_cost > record.max_cost {
        return Err(invalid("min_cost exceeds max_cost"));
    }
    if !record.min_cost.is_finite() || !record.max_cost.is_finite() {
        return Err(invalid("costs must be finite numbers"));
    }
    Ok(())
}
