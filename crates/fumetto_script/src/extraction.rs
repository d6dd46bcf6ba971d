//! Extracting JSON payloads from planner responses.
//!
//! Planner responses often wrap JSON in markdown code fences or surround it
//! with explanatory prose. Extraction tries the common patterns in order
//! rather than trusting the model to emit bare JSON.

use fumetto_error::{FumettoResult, SchemaError, SchemaErrorKind};

/// Extract a JSON payload from a response that may contain markdown or
/// extra text.
///
/// Strategies, in order:
/// 1. Markdown code blocks: ```json ... ```
/// 2. Balanced braces: { ... }
/// 3. Balanced brackets: [ ... ]
///
/// # Errors
///
/// Returns a schema error if no JSON can be located in the response.
pub fn extract_json(response: &str) -> FumettoResult<String> {
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    if let Some(json) = extract_balanced(response, '{', '}') {
        return Ok(json);
    }
    if let Some(json) = extract_balanced(response, '[', ']') {
        return Ok(json);
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in planner response"
    );
    Err(SchemaError::new(SchemaErrorKind::NoJsonFound(response.len())).into())
}

/// Extract content from a markdown code block, with or without a language
/// specifier.
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{language}");

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            return Some(response[content_start..content_start + end].trim().to_string());
        }
        // No closing fence, likely a truncated response
        return Some(response[content_start..].trim().to_string());
    }

    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip past any language specifier on the fence line
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            return Some(response[skip_to..skip_to + end].trim().to_string());
        }
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters, handling nesting and
/// string literals.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_json_code_block() {
        let response = "Here is the script:\n```json\n{\"panels\": []}\n```\nDone.";
        assert_eq!(extract_json(response).unwrap(), "{\"panels\": []}");
    }

    #[test]
    fn extracts_balanced_object_from_prose() {
        let response = "Sure! {\"title\": \"a {nested} brace\"} trailing text";
        assert_eq!(
            extract_json(response).unwrap(),
            "{\"title\": \"a {nested} brace\"}"
        );
    }

    #[test]
    fn reports_missing_json() {
        let err = extract_json("no structured content here").unwrap_err();
        assert!(format!("{err}").contains("No JSON found"));
    }
}
