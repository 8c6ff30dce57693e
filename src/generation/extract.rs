//! Pull the JSON object out of a model reply.
use serde::de::DeserializeOwned;

use super::client::StreamError;

const FENCE: &str = "```";

/// Return the JSON text of a reply.
///
/// Models often wrap their answer in a Markdown code fence even when told
/// not to. When the reply contains a fence (with or without a `json` tag)
/// whose body is an object, that body is returned; otherwise the whole reply,
/// trimmed.
///
/// ```
/// use launchkit::generation::extract_json;
///
/// let reply = "Here you go:\n```json\n{\"ok\": true}\n```\n";
/// assert_eq!(extract_json(reply), "{\"ok\": true}");
/// assert_eq!(extract_json("  {\"ok\": true} "), "{\"ok\": true}");
/// ```
pub fn extract_json(content: &str) -> &str {
    fenced_object(content).unwrap_or_else(|| content.trim())
}

fn fenced_object(content: &str) -> Option<&str> {
    let mut search = content;
    // try each opening fence until one is followed by an object
    while let Some(open) = search.find(FENCE) {
        let after = &search[open + FENCE.len()..];
        let body = after.strip_prefix("json").unwrap_or(after).trim_start();
        if body.starts_with('{') {
            // greedy: the object runs to the last closing fence preceded by '}'
            let inner = body
                .rmatch_indices(FENCE)
                .map(|(close, _)| body[..close].trim_end())
                .find(|inner| inner.ends_with('}'));
            if inner.is_some() {
                return inner;
            }
        }
        search = after;
    }
    None
}

/// Parse a reply into `T`.
///
/// Malformed JSON is a [`StreamError::Parse`]; well-formed JSON with the
/// wrong shape is a [`StreamError::Schema`].
pub fn parse_reply<T: DeserializeOwned>(content: &str) -> Result<T, StreamError> {
    let value: serde_json::Value = serde_json::from_str(extract_json(content))
        .map_err(|e| StreamError::Parse(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| StreamError::Schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        tags: Vec<String>,
    }

    const OBJECT: &str = r#"{"name": "TaskFlow", "tags": ["a", "b"]}"#;

    #[test]
    fn test_fenced_equals_unwrapped() {
        let plain: Sample = parse_reply(OBJECT).unwrap();
        for reply in [
            format!("```json\n{}\n```", OBJECT),
            format!("```\n{}\n```", OBJECT),
            format!("Sure! Here it is:\n\n```json {} ```\nEnjoy.", OBJECT),
        ] {
            let fenced: Sample = parse_reply(&reply).unwrap();
            assert_eq!(fenced, plain);
        }
    }

    #[test]
    fn test_unfenced_reply_is_trimmed() {
        assert_eq!(extract_json("\n  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_without_object_is_ignored() {
        let reply = "```text\nnot json\n```";
        assert_eq!(extract_json(reply), reply);
    }

    #[test]
    fn test_later_fence_with_object_is_found() {
        let reply = "```sh\nls\n```\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(reply), "{\"a\": 1}");
    }

    #[test]
    fn test_object_followed_by_another_fence() {
        let reply = "```json\n{\"a\": 1}\n```\n\nInstall with:\n```bash\nnpm i\n```";
        assert_eq!(extract_json(reply), "{\"a\": 1}");

        let reply = format!("```json\n{}\n```\nThen run:\n```\nnpm start\n```\n", OBJECT);
        let parsed: Sample = parse_reply(&reply).unwrap();
        assert_eq!(parsed.name, "TaskFlow");
    }

    #[test]
    fn test_nested_fences_in_strings_keep_the_outer_object() {
        let reply = "```json\n{\"code\": \"```js\\nx\\n```\"}\n```";
        assert_eq!(extract_json(reply), "{\"code\": \"```js\\nx\\n```\"}");
    }

    #[test]
    fn test_parse_and_schema_errors_differ() {
        assert!(matches!(
            parse_reply::<Sample>("not json"),
            Err(StreamError::Parse(_))
        ));
        assert!(matches!(
            parse_reply::<Sample>(r#"{"name": "x"}"#),
            Err(StreamError::Schema(_))
        ));
    }
}
