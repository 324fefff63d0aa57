//! Report data types mirroring the backend's JSON payloads.
//!
//! These types define the data model consumed by the viewer. They're designed to be:
//!
//! - **Serializable** - decoded straight from `/report` and `/recent` responses
//! - **Clone-friendly** - components take owned data without borrowing issues
//! - **Default-able** - build partial fixtures with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use af2_report::types::{RelationRecord, ReportResponse};
//!
//! let report = ReportResponse {
//!     relations: vec![RelationRecord {
//!         title: "Acme".into(),
//!         town: Some("Springfield".into()),
//!         hits: 25,
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(report.visible_relations().count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a `POST /report` request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Opaque identifier of the business entity being searched.
    pub oid: String,
}

impl SearchQuery {
    /// Wrap a raw input value. No normalization is applied.
    pub fn new(oid: impl Into<String>) -> Self {
        Self { oid: oid.into() }
    }

    /// JSON request body, e.g. `{"oid":"7017"}`.
    pub fn to_json(&self) -> String {
        serde_json::json!({ "oid": self.oid }).to_string()
    }
}

/// Association between the queried entity and another entity.
///
/// `town` is `None` both for an explicit `null` and for an absent key;
/// such records stay in the decoded response but are never rendered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// Display title of the related entity
    pub title: String,
    /// Town of the related entity, if the backend knows it
    #[serde(default)]
    pub town: Option<String>,
    /// Number of shared reviewers
    pub hits: u64,
    /// Median number of reviews per shared reviewer
    pub median: f64,
    /// Average rating shared reviewers gave the queried entity
    pub arating: f64,
    /// Average rating shared reviewers gave the related entity
    pub brating: f64,
    /// Backend classification tags
    #[serde(default)]
    pub tags: Option<String>,
    /// Human alias of the related entity
    #[serde(default)]
    pub alias: Option<String>,
    /// Opaque id of the related entity
    #[serde(default)]
    pub oid: Option<String>,
}

impl RelationRecord {
    /// Whether this record produces a table row.
    pub fn is_visible(&self) -> bool {
        self.town.is_some()
    }

    /// Whether the hits cell gets the warning marker.
    pub fn exceeds(&self, threshold: u64) -> bool {
        self.hits > threshold
    }

    /// Both ratings with one decimal place, space separated (`"4.6 2.1"`).
    pub fn rating_text(&self) -> String {
        format!("{} {}", to_fixed_1(self.arating), to_fixed_1(self.brating))
    }

    /// Median formatted the way a JavaScript template literal would (`3`, `3.2`).
    pub fn median_text(&self) -> String {
        js_number(self.median)
    }
}

/// Response of `POST /report`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Relations in backend order
    pub relations: Vec<RelationRecord>,
    /// Open score mapping, insertion ordered
    #[serde(default)]
    pub score: Map<String, Value>,
}

impl ReportResponse {
    /// Relations that will be rendered, in response order.
    pub fn visible_relations(&self) -> impl Iterator<Item = &RelationRecord> {
        self.relations.iter().filter(|rel| rel.is_visible())
    }

    /// Score entries as display pairs, in response order.
    pub fn score_entries(&self) -> Vec<ScoreEntry> {
        self.score
            .iter()
            .map(|(key, value)| ScoreEntry {
                key: key.clone(),
                value: display_value(value),
            })
            .collect()
    }
}

/// One rendered line of the score parameter list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Parameter name
    pub key: String,
    /// Value coerced to display text
    pub value: String,
}

impl ScoreEntry {
    /// Plain text form, `key: value`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}

/// An entity the backend has already vetted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedCompanyRecord {
    /// Display title
    pub title: String,
    /// Postal address
    pub address: String,
    /// Opaque id, used for the report page link
    pub oid: String,
}

impl TrustedCompanyRecord {
    /// Navigation target for a click on this card.
    pub fn report_href(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.oid)
    }
}

/// Response of `GET /recent`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentResponse {
    /// Vetted entities in backend order
    pub trusted: Vec<TrustedCompanyRecord>,
}

/// Coerce a JSON value to text using JavaScript's `String(value)` rules.
///
/// Strings are verbatim, arrays are comma joined with `null` elements
/// left empty, and objects collapse to `[object Object]`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => js_number(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Number text as JavaScript's `String(number)` produces it: shortest
/// round-trip digits, no trailing `.0`, exponent form (`1e+21`, `1e-7`)
/// below `1e-6` and from `1e21` up.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((digits, power)) if !power.starts_with('-') => format!("{}e+{}", digits, power),
            _ => exp,
        };
    }
    format!("{}", value)
}

/// One decimal place the way `Number.prototype.toFixed(1)` rounds: nearest
/// tenth of the exact binary value, exact ties away from zero.
pub fn to_fixed_1(value: f64) -> String {
    if !value.is_finite() {
        return js_number(value);
    }
    if value == 0.0 {
        return "0.0".to_string();
    }
    if is_tenth_tie(value) {
        let tenths = (value.abs() * 10.0).ceil();
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.1}", sign, tenths / 10.0);
    }
    format!("{:.1}", value)
}

/// Whether `value` sits exactly halfway between two tenths, i.e.
/// `20 * value` is an odd integer.
fn is_tenth_tie(value: f64) -> bool {
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 || exponent >= 0 {
        return false;
    }
    // 20 * mantissa < 2^58, so larger shifts never divide it
    let shift = exponent.unsigned_abs();
    if shift > 64 {
        return false;
    }
    let numerator = 20u128 * mantissa as u128;
    let denominator = 1u128 << shift;
    numerator % denominator == 0 && (numerator / denominator) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn search_query_serializes_as_oid_object() {
        let query = SearchQuery::new("70000001");
        assert_eq!(query.to_json(), r#"{"oid":"70000001"}"#);
    }

    #[test]
    fn rating_text_rounds_to_one_decimal() {
        let rel = RelationRecord {
            arating: 4.567,
            brating: 2.1,
            ..Default::default()
        };
        assert_eq!(rel.rating_text(), "4.6 2.1");

        let whole = RelationRecord {
            arating: 5.0,
            brating: 1.0,
            ..Default::default()
        };
        assert_eq!(whole.rating_text(), "5.0 1.0");
    }

    #[test]
    fn rating_ties_round_up_like_to_fixed() {
        assert_eq!(to_fixed_1(4.25), "4.3");
        assert_eq!(to_fixed_1(0.25), "0.3");
        assert_eq!(to_fixed_1(3.75), "3.8");
        assert_eq!(to_fixed_1(4.567), "4.6");
        assert_eq!(to_fixed_1(-0.25), "-0.3");

        let rel = RelationRecord {
            arating: 4.25,
            brating: 3.75,
            ..Default::default()
        };
        assert_eq!(rel.rating_text(), "4.3 3.8");
    }

    #[test]
    fn near_ties_follow_the_binary_value() {
        // 0.15 and 0.35 are stored slightly below the tie
        assert_eq!(to_fixed_1(0.15), "0.1");
        assert_eq!(to_fixed_1(0.35), "0.3");
        assert_eq!(to_fixed_1(0.0), "0.0");
        assert_eq!(to_fixed_1(-0.0), "0.0");
    }

    #[test]
    fn median_prints_like_javascript() {
        let rel = RelationRecord {
            median: 3.0,
            ..Default::default()
        };
        assert_eq!(rel.median_text(), "3");

        let rel = RelationRecord {
            median: 3.2,
            ..Default::default()
        };
        assert_eq!(rel.median_text(), "3.2");
    }

    #[test]
    fn threshold_is_strict() {
        let at = RelationRecord {
            hits: 20,
            ..Default::default()
        };
        let above = RelationRecord {
            hits: 21,
            ..Default::default()
        };
        assert!(!at.exceeds(20));
        assert!(above.exceeds(20));
    }

    #[test]
    fn display_value_follows_string_coercion() {
        assert_eq!(display_value(&json!("low")), "low");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(0.5)), "0.5");
        assert_eq!(display_value(&json!(2.0)), "2");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(null)), "null");
        assert_eq!(display_value(&json!([1, null, "x"])), "1,,x");
        assert_eq!(display_value(&json!({"nested": 1})), "[object Object]");
        assert_eq!(display_value(&json!(1e21)), "1e+21");
        assert_eq!(display_value(&json!(1.5e22)), "1.5e+22");
        assert_eq!(display_value(&json!(1e-7)), "1e-7");
        assert_eq!(display_value(&json!(0.000001)), "0.000001");
        assert_eq!(display_value(&json!(123456789.5)), "123456789.5");
    }

    #[test]
    fn score_entries_keep_response_order() {
        let report: ReportResponse = serde_json::from_value(json!({
            "relations": [],
            "score": {"zeta": 1, "alpha": "a", "mid": null}
        }))
        .expect("valid report");

        let labels: Vec<String> = report.score_entries().iter().map(ScoreEntry::label).collect();
        assert_eq!(labels, vec!["zeta: 1", "alpha: a", "mid: null"]);
    }

    #[test]
    fn trusted_href_appends_oid() {
        let company = TrustedCompanyRecord {
            oid: "141265769336625".into(),
            ..Default::default()
        };
        assert_eq!(company.report_href("/report/"), "/report/141265769336625");
    }
}
