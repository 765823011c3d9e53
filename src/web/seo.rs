//! SEO surfaces: per-page metadata, FAQ structured data, sitemap, robots.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use crate::catalog::CostRecord;
use crate::format::{capitalize_first, format_range};
use crate::narrative::Faq;
use crate::web::AppState;

/// Head metadata for one detail page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

/// Public URL for one slug, built from a fixed template.
pub fn public_url(base_url: &str, slug: &str) -> String {
    format!("{}/how-much-does-{}-really-cost", base_url, slug)
}

pub fn page_meta(record: &CostRecord, base_url: &str) -> PageMeta {
    let description = format!(
        "{} typically costs {}. Get a complete breakdown of what drives the cost and \
         what to expect.",
        capitalize_first(&record.topic),
        format_range(record.min_cost, record.max_cost, record.unit.as_deref())
    );

    PageMeta {
        title: record.title.clone(),
        description,
        canonical_url: public_url(base_url, &record.slug),
    }
}

/// schema.org FAQPage JSON-LD for the detail page.
pub fn faq_schema_json(faqs: &[Faq]) -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": faqs
            .iter()
            .map(|faq| json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer
                }
            }))
            .collect::<Vec<_>>(),
    })
    .to_string()
}

/// Sitemap: one root entry (priority 1.0) plus one entry per slug (0.8),
/// all stamped with today's date in W3C `YYYY-MM-DD` form.
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let last_mod = Utc::now().format("%Y-%m-%d").to_string();
    let base_url = &state.site.base_url;

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    push_url(&mut xml, base_url, &last_mod, "1.0");
    for record in state.catalog.records() {
        push_url(&mut xml, &public_url(base_url, &record.slug), &last_mod, "0.8");
    }
    xml.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

fn push_url(xml: &mut String, loc: &str, last_mod: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", loc));
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", last_mod));
    xml.push_str("    <changefreq>monthly</changefreq>\n");
    xml.push_str(&format!("    <priority>{}</priority>\n", priority));
    xml.push_str("  </url>\n");
}

pub async fn robots_txt(State(state): State<AppState>) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        state.site.base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_capitalizes_topic_and_embeds_range() {
        let record = CostRecord {
            slug: "a-wedding".to_string(),
            topic: "a wedding".to_string(),
            title: "How Much Does a Wedding Really Cost?".to_string(),
            min_cost: 15_000.0,
            max_cost: 45_000.0,
            unit: None,
            category: "Life Events".to_string(),
        };
        let meta = page_meta(&record, "https://example.com");
        assert!(meta.description.starts_with("A wedding typically costs $15,000 to $45,000."));
        assert_eq!(
            meta.canonical_url,
            "https://example.com/how-much-does-a-wedding-really-cost"
        );
    }

    #[test]
    fn test_faq_schema_shape() {
        let faqs = vec![Faq {
            question: "How much?".to_string(),
            answer: "A lot.".to_string(),
        }];
        let schema: serde_json::Value = serde_json::from_str(&faq_schema_json(&faqs)).unwrap();
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(schema["mainEntity"][0]["name"], "How much?");
        assert_eq!(schema["mainEntity"][0]["acceptedAnswer"]["text"], "A lot.");
    }
}
