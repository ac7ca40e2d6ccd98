//! Best-effort JSON extraction from free-text model replies
//!
//! Models are asked for pure JSON but routinely wrap it in prose or
//! code fences. Extraction takes the span from the first `{` to the
//! last `}` and parses it. Failure here is a normal outcome of talking
//! to a text generator, not a corruption bug, so the result is a typed
//! outcome rather than an error.

use serde_json::Value;

/// Outcome of scanning a reply for a JSON object
#[derive(Debug)]
pub enum Extraction {
    /// A parseable JSON object was found
    FoundValid(Value),
    /// Braces were found but the span did not parse
    FoundInvalid(String),
    /// No `{...}` span exists in the text
    NotFound,
}

/// Extract the first-`{`-to-last-`}` span of `text` and parse it
pub fn extract_json(text: &str) -> Extraction {
    let start = match text.find('{') {
        Some(i) => i,
        None => return Extraction::NotFound,
    };
    let end = match text.rfind('}') {
        Some(i) if i >= start => i,
        _ => return Extraction::NotFound,
    };

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(value) => Extraction::FoundValid(value),
        Err(e) => Extraction::FoundInvalid(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_valid() {
        let text = "Sure! Here is your plan:\n```json\n{\"goal\": \"pass\"}\n```\nGood luck!";
        match extract_json(text) {
            Extraction::FoundValid(value) => assert_eq!(value["goal"], "pass"),
            other => panic!("expected FoundValid, got {other:?}"),
        }
    }

    #[test]
    fn test_found_invalid() {
        let text = "{\"goal\": \"pass\", }} oops {";
        assert!(matches!(extract_json(text), Extraction::FoundInvalid(_)));
    }

    #[test]
    fn test_not_found() {
        assert!(matches!(
            extract_json("I cannot produce a plan right now."),
            Extraction::NotFound
        ));
        assert!(matches!(extract_json("} backwards {"), Extraction::NotFound));
    }

    #[test]
    fn test_nested_object() {
        let text = "{\"a\": {\"b\": 1}, \"c\": [1, 2]}";
        match extract_json(text) {
            Extraction::FoundValid(value) => assert_eq!(value["a"]["b"], 1),
            other => panic!("expected FoundValid, got {other:?}"),
        }
    }
}
