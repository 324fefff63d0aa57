//! Decode/validate step between a raw HTTP body and the renderers.
//!
//! Nothing is rendered from an unchecked payload: the body must be a JSON
//! object carrying the expected top-level keys before it is mapped onto
//! the typed model.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::types::{RecentResponse, ReportResponse};

/// Why a response body could not be turned into a typed payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not JSON, or a field has the wrong type.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Body is JSON but not shaped like the expected payload.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Decode a `POST /report` body.
pub fn decode_report(body: &str) -> Result<ReportResponse, DecodeError> {
    let report: ReportResponse = decode_with_keys(body, &["relations", "score"])?;
    let hidden = report.relations.len() - report.visible_relations().count();
    if hidden > 0 {
        tracing::debug!(hidden, "relations without town will not be rendered");
    }
    Ok(report)
}

/// Decode a `GET /recent` body.
pub fn decode_recent(body: &str) -> Result<RecentResponse, DecodeError> {
    decode_with_keys(body, &["trusted"])
}

fn decode_with_keys<T: DeserializeOwned>(body: &str, keys: &[&str]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    let Some(object) = value.as_object() else {
        return Err(DecodeError::UnexpectedShape(format!(
            "expected a JSON object, got {}",
            kind_of(&value)
        )));
    };
    for key in keys {
        match object.get(*key) {
            None => {
                return Err(DecodeError::UnexpectedShape(format!("missing `{}`", key)));
            }
            Some(Value::Null) => {
                return Err(DecodeError::UnexpectedShape(format!("`{}` is null", key)));
            }
            Some(_) => {}
        }
    }
    Ok(serde_json::from_value(value)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_report_with_null_town() {
        let body = r#"{"relations":[
            {"title":"Acme","town":"Springfield","hits":25,"median":3.2,"arating":4.567,"brating":2.1},
            {"title":"Beta","town":null,"hits":1,"median":1,"arating":1,"brating":1}
        ],"score":{"risk":"low"}}"#;

        let report = decode_report(body).expect("valid body");
        assert_eq!(report.relations.len(), 2);
        assert_eq!(report.relations[1].town, None);
        assert_eq!(report.visible_relations().count(), 1);
    }

    #[test]
    fn keeps_extra_relation_metadata() {
        let body = r#"{"relations":[{"title":"Acme","town":"X","hits":1,"median":1,
            "arating":1,"brating":1,"tags":"ad","alias":"acme","oid":"42"}],"score":{}}"#;
        let report = decode_report(body).expect("valid body");
        let rel = &report.relations[0];
        assert_eq!(rel.tags.as_deref(), Some("ad"));
        assert_eq!(rel.alias.as_deref(), Some("acme"));
        assert_eq!(rel.oid.as_deref(), Some("42"));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = decode_report("<html>502</html>").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn rejects_missing_relations() {
        let err = decode_report(r#"{"score":{}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedShape(ref msg) if msg.contains("relations")));
    }

    #[test]
    fn rejects_top_level_array() {
        let err = decode_recent("[]").unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn rejects_negative_hits() {
        let body = r#"{"relations":[{"title":"A","town":"T","hits":-1,"median":1,"arating":1,"brating":1}],"score":{}}"#;
        assert!(matches!(decode_report(body), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn decodes_recent() {
        let body = r#"{"trusted":[{"title":"Bakery","address":"Main st. 1","oid":"1"},
            {"title":"Cafe","address":"Main st. 2","oid":"2"}]}"#;
        let recent = decode_recent(body).expect("valid body");
        let titles: Vec<&str> = recent.trusted.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Bakery", "Cafe"]);
    }

    #[test]
    fn rejects_null_trusted() {
        assert!(matches!(
            decode_recent(r#"{"trusted":null}"#),
            Err(DecodeError::UnexpectedShape(_))
        ));
    }
}
