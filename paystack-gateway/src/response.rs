//! Interpretation of raw Paystack responses.
//!
//! Paystack wraps every payload as `{status, message, data}`. A call only
//! counts as successful when the HTTP status is 200 *and* `status` is `true`.

use paystack_types::GatewayResult;
use serde_json::{Map, Value};

/// Maps an HTTP response from Paystack to a [`GatewayResult`].
///
/// The body is decoded as JSON only when `content_type` says so; a body
/// that fails to decode is treated as absent. On failure the message falls
/// back to the raw body text.
pub fn classify(
    status: u16,
    content_type: &str,
    text: String,
    default_message: &str,
) -> GatewayResult {
    let body = if content_type.to_ascii_lowercase().contains("application/json") {
        serde_json::from_str::<Value>(&text).ok()
    } else {
        None
    };
    let object = body.as_ref().and_then(Value::as_object);

    let accepted = object
        .and_then(|o| o.get("status"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if status == 200 && accepted {
        let message = object
            .and_then(|o| o.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(default_message);
        return GatewayResult::success(message, object.and_then(data_field));
    }

    let message = object
        .and_then(|o| o.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
        .unwrap_or(text);
    GatewayResult::rejected(status, message, object.and_then(data_field))
}

fn data_field(object: &Map<String, Value>) -> Option<Value> {
    object.get("data").filter(|d| !d.is_null()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JSON: &str = "application/json; charset=utf-8";

    #[test]
    fn test_success_passes_data_through() {
        let body = json!({"status": true, "message": "M", "data": {"authorization_url": "u"}});
        let result = classify(200, JSON, body.to_string(), "Payment initialized");

        assert!(result.ok());
        assert_eq!(result.status_code(), 200);
        assert_eq!(result.message(), "M");
        assert_eq!(result.data(), Some(&json!({"authorization_url": "u"})));
    }

    #[test]
    fn test_success_without_message_uses_default() {
        let body = json!({"status": true, "data": {}});
        let result = classify(200, JSON, body.to_string(), "Verification successful");

        assert!(result.ok());
        assert_eq!(result.message(), "Verification successful");
    }

    #[test]
    fn test_non_json_error_uses_raw_text() {
        let result = classify(400, "text/html", "Bad Request".into(), "Payment initialized");

        assert!(!result.ok());
        assert_eq!(result.status_code(), 400);
        assert_eq!(result.message(), "Bad Request");
        assert!(result.data().is_none());
    }

    #[test]
    fn test_status_false_on_200_is_failure() {
        let body = json!({"status": false, "message": "Invalid key", "data": {"code": "x"}});
        let result = classify(200, JSON, body.to_string(), "Payment initialized");

        assert!(!result.ok());
        assert_eq!(result.status_code(), 200);
        assert_eq!(result.message(), "Invalid key");
        assert_eq!(result.data(), Some(&json!({"code": "x"})));
    }

    #[test]
    fn test_status_must_be_boolean_true() {
        let body = json!({"status": "true", "message": "odd"});
        let result = classify(200, JSON, body.to_string(), "Payment initialized");

        assert!(!result.ok());
    }

    #[test]
    fn test_empty_message_falls_back_to_text() {
        let text = json!({"status": false, "message": ""}).to_string();
        let result = classify(404, JSON, text.clone(), "Verification successful");

        assert_eq!(result.status_code(), 404);
        assert_eq!(result.message(), text);
    }

    #[test]
    fn test_malformed_json_treated_as_no_body() {
        let result = classify(200, JSON, "{not json".into(), "Payment initialized");

        assert!(!result.ok());
        assert_eq!(result.status_code(), 200);
        assert_eq!(result.message(), "{not json");
        assert!(result.data().is_none());
    }

    #[test]
    fn test_json_body_ignored_without_json_content_type() {
        let text = json!({"status": true, "message": "M"}).to_string();
        let result = classify(200, "text/plain", text.clone(), "Payment initialized");

        assert!(!result.ok());
        assert_eq!(result.message(), text);
    }

    #[test]
    fn test_non_object_json_has_no_data() {
        let result = classify(500, JSON, "[1,2]".into(), "Payment initialized");

        assert_eq!(result.message(), "[1,2]");
        assert!(result.data().is_none());
    }
}
