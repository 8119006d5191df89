//! Request and response serializers
//!
//! The HTTP boundary is consumed, not produced: callers describe an exchange
//! through the view structs here and get back metadata ready to attach to a
//! log record. Timing headers set by upstream middleware are picked up under
//! their custom `x-*` names; wire keys stay camelCase to match the fleet's
//! log schema.

use crate::core::{FieldValue, Metadata};
use std::collections::HashMap;

/// Header carrying the calling machine's identifier
pub const HEADER_MACHINE_ID: &str = "x-machine-id";
/// Header carrying the moment the caller sent the request
pub const HEADER_REQUEST_START: &str = "x-request-start-timestamp";
/// Header carrying the moment handling began
pub const HEADER_REQUEST_HANDLE: &str = "x-request-handle-timestamp";
/// Header carrying the handler's processing time
pub const HEADER_RESPONSE_TIME: &str = "x-response-time";
/// Header carrying the end-to-end time
pub const HEADER_TOTAL_TIME: &str = "x-total-time";

/// Inbound request view handed to the request serializer.
///
/// Header names are expected lowercase.
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    /// Path parameters extracted by the router
    pub params: HashMap<String, String>,
    pub headers: HashMap<String, String>,
}

/// Outbound response view handed to the response serializer.
#[derive(Debug, Clone, Default)]
pub struct ResponseInfo {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
}

/// Serialize a request view into log metadata.
///
/// `url` and `path` both carry the request URL. The machine and timing
/// fields appear only when the corresponding header is present.
pub fn serialize_request(request: &RequestInfo) -> Metadata {
    let parameters: Metadata = request
        .params
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let mut fields = Metadata::new()
        .with("method", request.method.clone())
        .with("url", request.url.clone())
        .with("path", request.url.clone())
        .with("parameters", parameters);

    for (header, key) in [
        (HEADER_MACHINE_ID, "machineId"),
        (HEADER_REQUEST_START, "requestStartTimestamp"),
        (HEADER_REQUEST_HANDLE, "requestHandleTimestamp"),
    ] {
        if let Some(value) = request.headers.get(header) {
            fields.insert(key, value.clone());
        }
    }

    fields
}

/// Serialize a response view into log metadata.
///
/// The timing fields default to `0` when the header is absent or empty.
pub fn serialize_response(response: &ResponseInfo) -> Metadata {
    let timing = |header: &str| {
        response
            .headers
            .get(header)
            .filter(|value| !value.is_empty())
            .map(|value| FieldValue::String(value.clone()))
            .unwrap_or(FieldValue::Int(0))
    };

    Metadata::new()
        .with("statusCode", response.status_code)
        .with("responseTime", timing(HEADER_RESPONSE_TIME))
        .with("totalTime", timing(HEADER_TOTAL_TIME))
}

/// The serializer pair carried by logger options.
#[derive(Clone, Copy)]
pub struct Serializers {
    pub request: fn(&RequestInfo) -> Metadata,
    pub response: fn(&ResponseInfo) -> Metadata,
}

impl Default for Serializers {
    fn default() -> Self {
        Self {
            request: serialize_request,
            response: serialize_response,
        }
    }
}

impl std::fmt::Debug for Serializers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializers").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_headers(headers: &[(&str, &str)]) -> RequestInfo {
        RequestInfo {
            method: "GET".to_string(),
            url: "/machines/42/status".to_string(),
            params: HashMap::from([("id".to_string(), "42".to_string())]),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_request_basic_fields() {
        let fields = serialize_request(&request_with_headers(&[]));

        assert_eq!(
            fields.get("method"),
            Some(&FieldValue::String("GET".into()))
        );
        assert_eq!(
            fields.get("url"),
            Some(&FieldValue::String("/machines/42/status".into()))
        );
        assert_eq!(fields.get("path"), fields.get("url"));

        let json = fields.to_json_value();
        assert_eq!(json["parameters"]["id"], "42");
    }

    #[test]
    fn test_request_machine_header_present() {
        let fields = serialize_request(&request_with_headers(&[(HEADER_MACHINE_ID, "m1")]));
        assert_eq!(
            fields.get("machineId"),
            Some(&FieldValue::String("m1".into()))
        );
    }

    #[test]
    fn test_request_absent_headers_leave_fields_absent() {
        let fields = serialize_request(&request_with_headers(&[]));
        assert!(!fields.contains_key("machineId"));
        assert!(!fields.contains_key("requestStartTimestamp"));
        assert!(!fields.contains_key("requestHandleTimestamp"));
    }

    #[test]
    fn test_request_timing_headers() {
        let fields = serialize_request(&request_with_headers(&[
            (HEADER_REQUEST_START, "1700000000000"),
            (HEADER_REQUEST_HANDLE, "1700000000250"),
        ]));
        assert_eq!(
            fields.get("requestStartTimestamp"),
            Some(&FieldValue::String("1700000000000".into()))
        );
        assert_eq!(
            fields.get("requestHandleTimestamp"),
            Some(&FieldValue::String("1700000000250".into()))
        );
    }

    #[test]
    fn test_response_with_timing_headers() {
        let response = ResponseInfo {
            status_code: 200,
            headers: HashMap::from([
                (HEADER_RESPONSE_TIME.to_string(), "15".to_string()),
                (HEADER_TOTAL_TIME.to_string(), "32".to_string()),
            ]),
        };

        let fields = serialize_response(&response);
        assert_eq!(fields.get("statusCode"), Some(&FieldValue::Int(200)));
        assert_eq!(
            fields.get("responseTime"),
            Some(&FieldValue::String("15".into()))
        );
        assert_eq!(
            fields.get("totalTime"),
            Some(&FieldValue::String("32".into()))
        );
    }

    #[test]
    fn test_response_missing_timing_defaults_to_zero() {
        let response = ResponseInfo {
            status_code: 204,
            headers: HashMap::new(),
        };

        let fields = serialize_response(&response);
        assert_eq!(fields.get("responseTime"), Some(&FieldValue::Int(0)));
        assert_eq!(fields.get("totalTime"), Some(&FieldValue::Int(0)));
    }

    #[test]
    fn test_response_empty_timing_header_defaults_to_zero() {
        let response = ResponseInfo {
            status_code: 200,
            headers: HashMap::from([(HEADER_RESPONSE_TIME.to_string(), String::new())]),
        };

        let fields = serialize_response(&response);
        assert_eq!(fields.get("responseTime"), Some(&FieldValue::Int(0)));
    }
}
