//! Pull narration text out of a Responses API body.

use serde_json::Value;

/// Narration text from a successful completion body.
///
/// Reads `output_text` first, then `output[0].content[0].text`, and returns
/// the first non-empty string exactly as the model wrote it. Returns `None`
/// for unparseable JSON or when neither path holds a non-empty string.
pub fn extract_output_text(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    let primary = json.get("output_text").and_then(Value::as_str);
    let nested = || {
        json.pointer("/output/0/content/0/text")
            .and_then(Value::as_str)
    };

    primary
        .filter(|text| !text.is_empty())
        .or_else(|| nested().filter(|text| !text.is_empty()))
        .map(str::to_string)
}
