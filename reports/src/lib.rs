//! # af2-report
//!
//! Typed decoding and HTML rendering for af2 relation reports.
//!
//! The backend answers a search with a list of relations and an open score
//! mapping, and lists recently vetted companies on request. This crate turns
//! those payloads into the exact markup the viewer page shows, using
//! [Leptos](https://leptos.dev/) server-side rendering. It is target
//! independent: the browser controller (`af2-viewer`) and the offline
//! renderer (`af2_render`) both call into it.
//!
//! ## Quick Start
//!
//! ```rust
//! use af2_report::{decode_report, render_report, ViewerConfig};
//!
//! let body = r#"{"relations":[{"title":"Acme","town":"Springfield","hits":25,
//!     "median":3.2,"arating":4.567,"brating":2.1}],"score":{"risk":"low"}}"#;
//!
//! let report = decode_report(body).unwrap();
//! let html = render_report(&report, &ViewerConfig::default());
//! assert!(html.contains("4.6 2.1"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - payload data model
//! - [`decode`] - validate a raw body before anything is rendered
//! - [`components`] - Leptos components for every fragment
//! - [`controller`] - countdown, toggle, submit gate, search sequencing
//! - [`dom`] - element ids shared with the page markup
//! - [`config`] - endpoints, thresholds, timings
//! - [`styles`] - CSS for standalone output

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod controller;
pub mod decode;
pub mod dom;
pub mod styles;
pub mod types;

use components::{
    RelationsTable, ReportDocument, ScoreList, SearchPlaceholder, TrustedCardBody, TrustedList,
};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use config::ViewerConfig;
pub use decode::{DecodeError, decode_recent, decode_report};
pub use types::{RecentResponse, RelationRecord, ReportResponse, TrustedCompanyRecord};

/// Render the `#result` contents for a search: relations table followed
/// by the score list, as one fragment.
pub fn render_report(report: &ReportResponse, config: &ViewerConfig) -> String {
    let relations = report.relations.clone();
    let entries = report.score_entries();
    let threshold = config.hits_threshold;

    view! {
        <RelationsTable relations=relations hits_threshold=threshold />
        <ScoreList entries=entries />
    }
    .to_html()
}

/// Inner markup of one trusted company card.
pub fn render_trusted_card(company: &TrustedCompanyRecord) -> String {
    let company = company.clone();
    view! { <TrustedCardBody company=company /> }.to_html()
}

/// Every trusted card as linked blocks, for static output.
pub fn render_trusted_list(recent: &RecentResponse, config: &ViewerConfig) -> String {
    let companies = recent.trusted.clone();
    let prefix = config.report_page_prefix.clone();
    view! { <TrustedList companies=companies href_prefix=prefix /> }.to_html()
}

/// Interim `#result-container` contents for a search that was just issued.
pub fn render_placeholder(oid: &str) -> String {
    let oid = oid.to_string();
    view! { <SearchPlaceholder oid=oid /> }.to_html()
}

/// Wrap a rendered fragment in a complete page.
///
/// # Example
///
/// ```rust
/// let html = af2_report::render_document("Report", "<p>body</p>");
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_document(title: &str, body_html: &str) -> String {
    let title = title.to_string();
    let body_html = body_html.to_string();
    let doc = view! { <ReportDocument title=title body_html=body_html /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = r#"{"relations":[
        {"title":"Acme","town":"Springfield","hits":25,"median":3.2,"arating":4.567,"brating":2.1},
        {"title":"Beta","town":null,"hits":1,"median":1,"arating":1,"brating":1}
    ],"score":{"risk":"low"}}"#;

    fn relation(title: &str, town: Option<&str>, hits: u64) -> RelationRecord {
        RelationRecord {
            title: title.into(),
            town: town.map(Into::into),
            hits,
            median: 2.0,
            arating: 4.0,
            brating: 4.0,
            ..Default::default()
        }
    }

    #[test]
    fn renders_worked_example() {
        let report = decode_report(EXAMPLE).expect("valid example");
        let html = render_report(&report, &ViewerConfig::default());

        assert_eq!(html.matches("<tr>").count(), 2, "header plus one row");
        assert!(html.contains("Acme"));
        assert!(html.contains("Springfield"));
        assert!(!html.contains("Beta"));
        assert!(html.contains(r#"class="red""#));
        assert!(html.contains(">25<"));
        assert!(html.contains("3.2"));
        assert!(html.contains("4.6 2.1"));
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains("<b>risk:</b> low"));
    }

    #[test]
    fn renders_fixed_columns() {
        let html = render_report(&ReportResponse::default(), &ViewerConfig::default());
        for column in ["Title", "Town", "Hits", "Median", "A/B rating"] {
            assert!(html.contains(&format!("<th>{}</th>", column)), "{}", column);
        }
        assert!(html.contains("Score Parameters"));
    }

    #[test]
    fn table_precedes_score_list() {
        let report = decode_report(EXAMPLE).expect("valid example");
        let html = render_report(&report, &ViewerConfig::default());
        let table_end = html.find("</table>").expect("table");
        let score = html.find("score-container").expect("score list");
        assert!(table_end < score);
    }

    #[test]
    fn preserves_relation_order() {
        let report = ReportResponse {
            relations: vec![
                relation("Zulu", Some("A"), 1),
                relation("Hidden", None, 99),
                relation("Alpha", Some("B"), 2),
                relation("Mike", Some("C"), 3),
            ],
            ..Default::default()
        };
        let html = render_report(&report, &ViewerConfig::default());

        let zulu = html.find("Zulu").expect("Zulu row");
        let alpha = html.find("Alpha").expect("Alpha row");
        let mike = html.find("Mike").expect("Mike row");
        assert!(zulu < alpha && alpha < mike);
        assert!(!html.contains("Hidden"));
        assert_eq!(html.matches("<tr>").count(), 4);
    }

    #[test]
    fn rating_ties_render_rounded_up() {
        let report = ReportResponse {
            relations: vec![RelationRecord {
                title: "Tie".into(),
                town: Some("T".into()),
                arating: 4.25,
                brating: 3.75,
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_report(&report, &ViewerConfig::default());
        assert!(html.contains("4.3 3.8"));
    }

    #[test]
    fn marks_only_hits_above_threshold() {
        let at_threshold = ReportResponse {
            relations: vec![relation("Edge", Some("T"), 20)],
            ..Default::default()
        };
        let html = render_report(&at_threshold, &ViewerConfig::default());
        assert!(!html.contains(r#"class="red""#));

        let above = ReportResponse {
            relations: vec![relation("Edge", Some("T"), 21)],
            ..Default::default()
        };
        let html = render_report(&above, &ViewerConfig::default());
        assert_eq!(html.matches(r#"class="red""#).count(), 1);
    }

    #[test]
    fn threshold_comes_from_config() {
        let report = ReportResponse {
            relations: vec![relation("Edge", Some("T"), 8)],
            ..Default::default()
        };
        let config = ViewerConfig {
            hits_threshold: 5,
            ..Default::default()
        };
        assert!(render_report(&report, &config).contains(r#"class="red""#));
    }

    #[test]
    fn score_list_one_entry_per_key_in_order() {
        let body = r#"{"relations":[],"score":{"trusted":true,"NR":12,"WSS":0.25,"reason":"ok"}}"#;
        let report = decode_report(body).expect("valid body");
        let html = render_report(&report, &ViewerConfig::default());

        assert_eq!(html.matches("<li>").count(), 4);
        let positions: Vec<usize> = ["<b>trusted:</b> true", "<b>NR:</b> 12", "<b>WSS:</b> 0.25", "<b>reason:</b> ok"]
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn escapes_backend_text() {
        let report = ReportResponse {
            relations: vec![relation("<script>x</script>", Some("T"), 1)],
            ..Default::default()
        };
        let html = render_report(&report, &ViewerConfig::default());
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn renders_trusted_card_body() {
        let company = TrustedCompanyRecord {
            title: "Bakery".into(),
            address: "Main st. 1".into(),
            oid: "1".into(),
        };
        let html = render_trusted_card(&company);
        assert!(html.contains("company-title"));
        assert!(html.contains("Bakery"));
        assert!(html.contains("trusted-tag"));
        assert!(html.contains(components::TRUSTED_TAG));
        assert!(html.contains("Main st. 1"));
    }

    #[test]
    fn renders_trusted_list_in_order_with_links() {
        let recent = decode_recent(
            r#"{"trusted":[{"title":"B","address":"x","oid":"2"},{"title":"A","address":"y","oid":"1"}]}"#,
        )
        .expect("valid body");
        let html = render_trusted_list(&recent, &ViewerConfig::default());

        assert_eq!(html.matches(r#"class="company""#).count(), 2);
        let first = html.find(r#"href="/report/2""#).expect("first link");
        let second = html.find(r#"href="/report/1""#).expect("second link");
        assert!(first < second);
    }

    #[test]
    fn renders_placeholder_with_oid() {
        let html = render_placeholder("70000001");
        assert!(html.contains("Результаты поиска: 70000001"));
        assert!(html.contains(r#"id="company-details""#));
    }

    #[test]
    fn renders_standalone_document() {
        let report = decode_report(EXAMPLE).expect("valid example");
        let fragment = render_report(&report, &ViewerConfig::default());
        let html = render_document("Acme report", &fragment);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme report</title>"));
        assert!(html.contains("td.red"));
        assert!(html.contains("4.6 2.1"));
    }
}
