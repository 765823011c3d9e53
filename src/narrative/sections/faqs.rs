//! FAQs
//!
//! Exactly five question/answer pairs per record, in a fixed order: price
//! range, negotiation/savings, comparison guidance, hidden fees, fairness
//! check (recurring) or its one-time equivalent. The topic and formatted
//! range are interpolated into fixed templates.

use crate::catalog::CostRecord;
use crate::format::format_range;
use crate::narrative::classify::PricingModel;
use crate::narrative::types::Faq;

pub fn generate(record: &CostRecord, model: PricingModel) -> Vec<Faq> {
    let topic_lower = record.topic.to_lowercase();
    let range = format_range(record.min_cost, record.max_cost, record.unit.as_deref());

    if model.is_recurring() {
        recurring_faqs(&topic_lower, &range)
    } else {
        one_time_faqs(&topic_lower, &range)
    }
}

fn recurring_faqs(topic: &str, range: &str) -> Vec<Faq> {
    vec![
        Faq {
            question: format!("What's the typical price range for {}?", topic),
            answer: format!(
                "Most people pay {} for {}. Actual costs depend on your location, the \
                 provider's experience, and the specific services or features included \
                 in your package.",
                range, topic
            ),
        },
        Faq {
            question: format!("Can I negotiate the price of {}?", topic),
            answer: "Yes, many providers offer flexibility, especially for longer \
                     commitments or bundled services. Ask about annual payment \
                     discounts, promotional rates, or customized packages that fit your \
                     budget."
                .to_string(),
        },
        Faq {
            question: format!("What should I look for when comparing {} providers?", topic),
            answer: "Compare what's included in each price tier, check reviews and \
                     references, understand cancellation policies, and ask about any \
                     additional fees. The cheapest option isn't always the best value."
                .to_string(),
        },
        Faq {
            question: "Are there hidden fees I should watch out for?".to_string(),
            answer: "Common hidden costs include setup fees, price increases after \
                     promotional periods, charges for premium features, and \
                     cancellation penalties. Always ask for a complete breakdown of all \
                     costs before signing up."
                .to_string(),
        },
        Faq {
            question: "How do I know if I'm getting a fair price?".to_string(),
            answer: "Get quotes from at least three providers, research market rates in \
                     your area, and read reviews from verified customers. If a price \
                     seems too good to be true, ask what's not included."
                .to_string(),
        },
    ]
}

fn one_time_faqs(topic: &str, range: &str) -> Vec<Faq> {
    vec![
        Faq {
            question: format!("How much should I budget for {}?", topic),
            answer: format!(
                "Budget {} for {}. Your actual cost will depend on your location, \
                 project scope, materials chosen, and the providers you select. Always \
                 add 10-15% for unexpected expenses.",
                range, topic
            ),
        },
        Faq {
            question: format!("What factors most affect the cost of {}?", topic),
            answer: "The biggest cost factors are typically your geographic location, \
                     the scope and complexity of the project, material or service \
                     quality, and the experience level of the professionals involved."
                .to_string(),
        },
        Faq {
            question: format!("How can I save money on {}?", topic),
            answer: "Get multiple quotes, be flexible on timing, consider doing some \
                     prep work yourself, and ask about payment plans or discounts. \
                     However, don't sacrifice quality for minor savings on important \
                     projects."
                .to_string(),
        },
        Faq {
            question: format!("Should I choose the cheapest option for {}?", topic),
            answer: "Not necessarily. The cheapest option may cut corners, use inferior \
                     materials, or lack proper insurance and warranties. Focus on \
                     value\u{2014}quality work at a fair price\u{2014}rather than the \
                     lowest bid."
                .to_string(),
        },
        Faq {
            question: format!("How many quotes should I get for {}?", topic),
            answer: "Get at least three quotes from reputable providers. This helps you \
                     understand the market rate and identify outliers. Be wary of \
                     quotes significantly below or above the average."
                .to_string(),
        },
    ]
}
