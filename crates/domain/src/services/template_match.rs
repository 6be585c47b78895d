//! Template variable matching.
//!
//! A template declares a set of variable names; content referencing the
//! template must supply a value for every declared name. The check is
//! pure: persistence of accepted content is the caller's concern.

use serde_json::{Map, Value};
use thiserror::Error;

/// Rejection reason for a content payload that does not satisfy the
/// referenced template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Content does not match template: missing {}", missing.join(", "))]
pub struct TemplateMatchError {
    /// Declared variable names absent from the payload, in declaration order.
    pub missing: Vec<String>,
}

/// Checks that `fields` supplies every declared template variable.
///
/// Matching is by exact, case-sensitive key equality and is independent
/// of key order; extra payload keys are allowed. An empty declared set
/// trivially matches any payload.
pub fn content_matches_template(
    declared: &[String],
    fields: &Map<String, Value>,
) -> Result<(), TemplateMatchError> {
    let missing: Vec<String> = declared
        .iter()
        .filter(|name| !fields.contains_key(*name))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TemplateMatchError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn test_matches_when_all_variables_supplied() {
        let declared = vec!["name".to_string(), "date".to_string()];
        let payload = fields(&[("date", "2024-01-01"), ("name", "A")]);
        assert!(content_matches_template(&declared, &payload).is_ok());
    }

    #[test]
    fn test_extra_keys_are_allowed() {
        let declared = vec!["name".to_string(), "date".to_string()];
        let payload = fields(&[("name", "A"), ("date", "2024-01-01"), ("extra", "x")]);
        assert!(content_matches_template(&declared, &payload).is_ok());
    }

    #[test]
    fn test_missing_variable_is_reported() {
        let declared = vec!["name".to_string(), "date".to_string()];
        let payload = fields(&[("name", "A")]);
        let err = content_matches_template(&declared, &payload).unwrap_err();
        assert_eq!(err.missing, vec!["date".to_string()]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let declared = vec!["orderNumber".to_string()];
        let payload = fields(&[("ordernumber", "123")]);
        assert!(content_matches_template(&declared, &payload).is_err());
    }

    #[test]
    fn test_empty_declared_set_matches_any_payload() {
        let declared: Vec<String> = vec![];
        assert!(content_matches_template(&declared, &Map::new()).is_ok());
        let payload = fields(&[("anything", "goes")]);
        assert!(content_matches_template(&declared, &payload).is_ok());
    }
}
