//! Page handlers for HTML rendering with Askama.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::catalog::CostRecord;
use crate::format::{capitalize_first, format_usd};
use crate::listing;
use crate::narrative::NarrativeBlock;
use crate::web::seo::{self, PageMeta};
use crate::web::AppState;

// ============================================================================
// Home Page
// ============================================================================

/// One listing card on the homepage.
pub struct CostCard {
    pub href: String,
    pub heading: String,
    pub range: String,
    /// Lowercased topic/title/category, matched by the client-side filter.
    pub search_text: String,
}

pub struct CategorySection {
    pub name: &'static str,
    pub cards: Vec<CostCard>,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub total_count: usize,
    pub popular: Vec<CostCard>,
    pub sections: Vec<CategorySection>,
}

pub async fn home_page(State(state): State<AppState>) -> Response {
    let records = state.catalog.records();

    let popular = listing::popular(records).into_iter().map(cost_card).collect();
    let sections = listing::filter_and_group(records, "")
        .into_iter()
        .map(|(name, group)| CategorySection {
            name,
            cards: group.into_iter().map(cost_card).collect(),
        })
        .collect();

    render(HomeTemplate {
        total_count: records.len(),
        popular,
        sections,
    })
}

fn cost_card(record: &CostRecord) -> CostCard {
    let range = match record.unit.as_deref() {
        Some(unit) => format!(
            "{}\u{2013}{} {}",
            format_usd(record.min_cost),
            format_usd(record.max_cost),
            unit
        ),
        None => format!(
            "{}\u{2013}{}",
            format_usd(record.min_cost),
            format_usd(record.max_cost)
        ),
    };

    CostCard {
        href: format!("/how-much-does-{}-really-cost", record.slug),
        heading: capitalize_first(&record.topic),
        range,
        search_text: format!("{} {} {}", record.topic, record.title, record.category)
            .to_lowercase(),
    }
}

// ============================================================================
// Cost Detail Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/cost.html")]
pub struct CostTemplate {
    pub title: String,
    pub meta: PageMeta,
    pub narrative: NarrativeBlock,
    /// Pre-serialized FAQPage JSON-LD, embedded verbatim.
    pub faq_schema: String,
}

pub async fn cost_page(State(state): State<AppState>, Path(page): Path<String>) -> Response {
    let Some(slug) = parse_cost_path(&page) else {
        return not_found_page();
    };
    let Some(record) = state.catalog.get(slug) else {
        return not_found_page();
    };

    let narrative = state.generator.derive(record);
    let faq_schema = seo::faq_schema_json(&narrative.faqs);
    let meta = seo::page_meta(record, &state.site.base_url);

    render(CostTemplate {
        title: record.title.clone(),
        meta,
        narrative,
        faq_schema,
    })
}

/// Parse a `how-much-does-{slug}-really-cost` path segment into its slug.
pub fn parse_cost_path(page: &str) -> Option<&str> {
    page.strip_prefix("how-much-does-")?
        .strip_suffix("-really-cost")
        .filter(|slug| !slug.is_empty())
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
struct NotFoundTemplate;

fn not_found_page() -> Response {
    match NotFoundTemplate.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => render_error(e),
    }
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_error(e),
    }
}

fn render_error(e: askama::Error) -> Response {
    tracing::error!("template render failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
}
