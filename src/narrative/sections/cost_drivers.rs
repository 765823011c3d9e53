//! Cost Drivers
//!
//! Three universal drivers (location, provider reputation, scope) followed
//! by model-specific ones. The flat one-time branch adds four drivers where
//! the other two branches add three, so flat records list 7 drivers and
//! unit-priced records list 6. That asymmetry is intentional content
//! behavior, carried over as-is.

use crate::narrative::classify::PricingModel;

const BASE_DRIVERS: [&str; 3] = [
    "Geographic location and local market rates",
    "Provider experience and reputation",
    "Scope and complexity of the project or service",
];

pub fn generate(model: PricingModel) -> Vec<String> {
    let extra: &[&str] = match model {
        PricingModel::Recurring => &[
            "Level of service and features included",
            "Contract length and payment terms",
            "Additional services or premium options",
        ],
        PricingModel::PerUnit => &[
            "Time and labor requirements",
            "Quality of materials or tools used",
            "Urgency and scheduling flexibility",
        ],
        PricingModel::Flat => &[
            "Material quality and brand choices",
            "Labor costs and contractor availability",
            "Permits, inspections, and regulatory requirements",
            "Project timeline and scheduling",
        ],
    };

    BASE_DRIVERS
        .iter()
        .chain(extra.iter())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_counts_per_model() {
        assert_eq!(generate(PricingModel::Recurring).len(), 6);
        assert_eq!(generate(PricingModel::PerUnit).len(), 6);
        assert_eq!(generate(PricingModel::Flat).len(), 7);
    }

    #[test]
    fn test_universal_drivers_lead_every_list() {
        for model in [
            PricingModel::Flat,
            PricingModel::PerUnit,
            PricingModel::Recurring,
        ] {
            let drivers = generate(model);
            assert_eq!(drivers[0], "Geographic location and local market rates");
            assert_eq!(drivers[1], "Provider experience and reputation");
            assert_eq!(drivers[2], "Scope and complexity of the project or service");
        }
    }

    #[test]
    fn test_flat_branch_includes_permits() {
        let drivers = generate(PricingModel::Flat);
        assert!(drivers
            .iter()
            .any(|d| d == "Permits, inspections, and regulatory requirements"));
    }
}
