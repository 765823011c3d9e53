//! Is It Worth It?
//!
//! One fixed paragraph keyed on billing cadence, with the topic interpolated
//! in lowercase.

use crate::catalog::CostRecord;
use crate::narrative::classify::PricingModel;

pub fn generate(record: &CostRecord, model: PricingModel) -> String {
    let topic_lower = record.topic.to_lowercase();

    if model.is_recurring() {
        format!(
            "Whether {} is worth the ongoing investment depends on your specific \
             situation, goals, and alternatives. Consider the time you'll save, the \
             expertise you're accessing, and the potential return on investment. For \
             many, the convenience and professional results justify the cost, while \
             others may find DIY or lower-cost alternatives sufficient. Evaluate your \
             priorities and compare several providers before committing.",
            topic_lower
        )
    } else {
        format!(
            "Whether {} is worth the investment depends on your individual \
             circumstances, timeline, and priorities. Consider factors like how long \
             you'll benefit from the results, the importance of quality versus cost \
             savings, and your available alternatives. For many people, investing in \
             quality pays off through better results, fewer problems, and greater \
             satisfaction. However, budget-conscious options can work well for \
             straightforward needs. Research thoroughly and get multiple quotes before \
             deciding.",
            topic_lower
        )
    }
}
