//! Hidden Costs
//!
//! A two-way branch on billing cadence only (unit presence without cadence
//! does not matter here): recurring items list five subscription-style fees,
//! everything else lists six project-style fees.

use crate::narrative::classify::PricingModel;

pub fn generate(model: PricingModel) -> Vec<String> {
    let items: &[&str] = if model.is_recurring() {
        &[
            "Setup or onboarding fees often charged separately",
            "Price increases after promotional periods end",
            "Additional fees for premium features or add-ons",
            "Cancellation fees or early termination penalties",
            "Transaction fees or usage-based charges",
        ]
    } else {
        &[
            "Permits, licenses, and inspection fees",
            "Unexpected issues discovered during the project",
            "Disposal and cleanup costs",
            "Travel or transportation charges",
            "Changes or additions requested after work begins",
            "Follow-up maintenance or adjustments",
        ]
    };

    items.iter().map(|s| s.to_string()).collect()
}
