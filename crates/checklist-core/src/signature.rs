//! Signature Payload Handling
//!
//! Uploaded signatures live in form state as full data URLs so the preview
//! can render them; only the bare base64 content is transmitted.

use serde_json::Value;

/// Strip the `data:<mime>;base64,` prefix, leaving bare base64.
/// Inputs without the prefix pass through unchanged.
pub fn strip_data_url_prefix(data_url: &str) -> &str {
    match data_url.split_once("base64,") {
        Some((_, content)) => content,
        None => data_url,
    }
}

/// Outbound representation: absent signatures are `null`.
pub fn signature_to_json(raw: &str) -> Value {
    let content = strip_data_url_prefix(raw.trim());
    if content.is_empty() {
        Value::Null
    } else {
        Value::String(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_png_data_url() {
        assert_eq!(
            strip_data_url_prefix("data:image/png;base64,iVBORw0KGgo="),
            "iVBORw0KGgo="
        );
    }

    #[test]
    fn test_bare_base64_passes_through() {
        assert_eq!(strip_data_url_prefix("iVBORw0KGgo="), "iVBORw0KGgo=");
    }

    #[test]
    fn test_signature_to_json_empty_is_null() {
        assert_eq!(signature_to_json(""), Value::Null);
        assert_eq!(signature_to_json("data:image/png;base64,"), Value::Null);
        assert_eq!(
            signature_to_json("data:image/jpeg;base64,AAAA"),
            Value::String("AAAA".to_string())
        );
    }
}
