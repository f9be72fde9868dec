//! Recovers structured JSON from noisy model output.
//!
//! Models frequently wrap valid JSON in prose or markdown fences, or leave
//! literal newlines inside what should be a compact string. The extractor
//! runs an ordered fallback chain targeting exactly those failure modes:
//!
//! 1. strict parse of the whole text (already-structured values short-circuit);
//! 2. strict parse of the outermost `{...}` span (first `{` to last `}`);
//! 3. one retry of that span with newlines replaced by spaces and carriage
//!    returns stripped.
//!
//! Anything still unparsed is a classified failure; data is never fabricated.

use serde_json::Value;
use std::fmt;

use crate::completion::RawCompletion;

#[derive(Debug)]
pub enum ExtractError {
    /// The completion text contains no `{...}` span at all.
    NoJsonObject { raw: String },
    /// A span was found but strict parsing failed, before and after
    /// normalization. `detail` carries the parser's own error text.
    Unparsable { raw: String, detail: String },
}

impl ExtractError {
    /// Diagnostic detail suitable for an error payload.
    pub fn detail(&self) -> String {
        match self {
            ExtractError::NoJsonObject { .. } => {
                "Could not extract JSON from response".to_string()
            }
            ExtractError::Unparsable { detail, .. } => {
                format!("Could not parse extracted JSON: {}", detail)
            }
        }
    }

    /// The original completion text, kept for diagnostics.
    pub fn raw(&self) -> &str {
        match self {
            ExtractError::NoJsonObject { raw } => raw,
            ExtractError::Unparsable { raw, .. } => raw,
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail())
    }
}

/// Coerce raw model output into a JSON value via the fallback chain.
///
/// Syntactic validity is all that is guaranteed; the value is not checked
/// against any endpoint schema.
pub fn extract_json(raw: RawCompletion) -> Result<Value, ExtractError> {
    let text = match raw {
        RawCompletion::Structured(value) => return Ok(value),
        RawCompletion::Text(text) => text,
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => return Ok(value),
        Err(e) => tracing::debug!("Direct JSON parse failed: {}", e),
    }

    // Outermost span: first `{` to last `}`, greedy across the whole text.
    // Multiple independent objects are not disambiguated; the combined span
    // simply fails below and is reported as unparsable.
    let span = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            tracing::debug!("No JSON object found in completion text: {}", text);
            return Err(ExtractError::NoJsonObject { raw: text });
        }
    };

    if let Ok(value) = serde_json::from_str::<Value>(span) {
        return Ok(value);
    }

    // Literal newlines inside strings break strict parsing; one normalization
    // retry, nothing more elaborate.
    let cleaned = span.replace('\n', " ").replace('\r', "");
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!("Failed to parse extracted JSON: {} (raw: {})", e, text);
            Err(ExtractError::Unparsable {
                detail: e.to_string(),
                raw: text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> RawCompletion {
        RawCompletion::Text(s.to_string())
    }

    #[test]
    fn valid_json_is_accepted_directly() {
        let value = json!({"a": 1, "b": [true, null, "x"]});
        let parsed = extract_json(text(&value.to_string())).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn structured_value_short_circuits() {
        let value = json!({"current": {"temperature": 21}});
        let parsed = extract_json(RawCompletion::Structured(value.clone())).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn json_wrapped_in_prose_is_recovered() {
        let parsed =
            extract_json(text("Sure! Here is the data: {\"a\":1} Hope that helps.")).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn json_in_markdown_fence_is_recovered() {
        let parsed = extract_json(text("```json\n{\"a\": 1}\n```")).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn newline_between_tokens_parses() {
        let parsed = extract_json(text("{\"a\":\n1}")).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn literal_newline_inside_string_is_normalized() {
        // A raw control character inside a JSON string fails strict parsing
        // until the newline is replaced with a space.
        let parsed = extract_json(text("{\"summary\": \"first line\nsecond line\"}")).unwrap();
        assert_eq!(parsed, json!({"summary": "first line second line"}));
    }

    #[test]
    fn no_brace_is_classified_as_no_object() {
        let err = extract_json(text("I cannot help with that.")).unwrap_err();
        match err {
            ExtractError::NoJsonObject { raw } => {
                assert_eq!(raw, "I cannot help with that.");
            }
            other => panic!("expected NoJsonObject, got {:?}", other),
        }
    }

    #[test]
    fn empty_and_whitespace_input_is_no_object() {
        assert!(matches!(
            extract_json(text("")),
            Err(ExtractError::NoJsonObject { .. })
        ));
        assert!(matches!(
            extract_json(text("   \n\t ")),
            Err(ExtractError::NoJsonObject { .. })
        ));
    }

    #[test]
    fn reversed_braces_are_no_object() {
        assert!(matches!(
            extract_json(text("} nothing here {")),
            Err(ExtractError::NoJsonObject { .. })
        ));
    }

    #[test]
    fn malformed_span_keeps_parser_error() {
        let err = extract_json(text("result: {\"a\": } done")).unwrap_err();
        match err {
            ExtractError::Unparsable { raw, detail } => {
                assert_eq!(raw, "result: {\"a\": } done");
                assert!(!detail.is_empty());
                assert!(err_detail_mentions_parse(&detail));
            }
            other => panic!("expected Unparsable, got {:?}", other),
        }
    }

    #[test]
    fn multiple_objects_span_is_unparsable() {
        // The outermost-span heuristic joins both objects into one malformed
        // candidate; that failure is surfaced, not worked around.
        let err = extract_json(text("{\"a\":1} and also {\"b\":2}")).unwrap_err();
        assert!(matches!(err, ExtractError::Unparsable { .. }));
    }

    fn err_detail_mentions_parse(detail: &str) -> bool {
        detail.contains("expected") || detail.contains("EOF") || detail.contains("line")
    }
}
