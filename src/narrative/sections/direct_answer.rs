//! Direct Answer
//!
//! The opening paragraph: the formatted price range followed by one of two
//! fixed framing sentences. Unit-priced items get service/price framing,
//! flat costs get project/market framing.

use crate::catalog::CostRecord;
use crate::format::format_range;
use crate::narrative::classify::PricingModel;

pub fn generate(record: &CostRecord, model: PricingModel) -> String {
    let range = format_range(record.min_cost, record.max_cost, record.unit.as_deref());
    let topic_lower = record.topic.to_lowercase();

    if model.has_unit() {
        format!(
            "The typical cost of {} ranges from {}. Actual prices vary based on your \
             location, specific requirements, provider experience, and the scope of \
             services included. Always get multiple quotes and compare what's included \
             before making a decision.",
            topic_lower, range
        )
    } else {
        format!(
            "The typical cost of {} ranges from {}. Prices vary significantly based on \
             your geographic location, project complexity, materials or service quality, \
             and current market conditions. Getting multiple quotes is essential for \
             finding the best value.",
            topic_lower, range
        )
    }
}
