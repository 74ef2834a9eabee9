//! The JSON response envelope.
//!
//! Every REST response carries the same wrapper: numeric status, the request
//! identifier, optional version/payload/error, and the identity of the host
//! that served it.

use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Identity of the serving host, resolved once at process start.
///
/// Resolution is fallible and belongs to the entry point; handlers receive
/// the already-resolved value through shared state.
#[derive(Debug, Clone)]
pub struct HostInfo {
    name: String,
}

impl HostInfo {
    /// Resolve the OS hostname.
    pub fn resolve() -> std::io::Result<Self> {
        let name = hostname::get()?.to_string_lossy().into_owned();
        Ok(Self { name })
    }

    /// Use a fixed name instead of the OS hostname.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// JSON wrapper for REST responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: u16,

    pub request_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub host: String,
}

impl Envelope {
    /// 200 envelope carrying the service version.
    pub fn ok_with_version(request_id: &str, version: &str, host: &HostInfo) -> Self {
        Self {
            status: 200,
            request_id: request_id.to_string(),
            version: Some(version.to_string()),
            data: None,
            error: None,
            host: host.as_str().to_string(),
        }
    }

    /// Plain 200 envelope.
    pub fn ok(request_id: &str, host: &HostInfo) -> Self {
        Self {
            status: 200,
            request_id: request_id.to_string(),
            version: None,
            data: None,
            error: None,
            host: host.as_str().to_string(),
        }
    }

    /// 404 envelope describing what was not found.
    pub fn not_found(request_id: &str, error: impl std::fmt::Display, host: &HostInfo) -> Self {
        Self {
            status: 404,
            request_id: request_id.to_string(),
            version: None,
            data: None,
            error: Some(error.to_string()),
            host: host.as_str().to_string(),
        }
    }

    /// 500 envelope for failures on our side.
    pub fn internal_error(request_id: &str, error: impl std::fmt::Display, host: &HostInfo) -> Self {
        Self {
            status: 500,
            request_id: request_id.to_string(),
            version: None,
            data: None,
            error: Some(error.to_string()),
            host: host.as_str().to_string(),
        }
    }

    /// Attach a payload.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostInfo {
        HostInfo::named("test-host")
    }

    #[test]
    fn optionals_are_omitted_when_empty() {
        let json = serde_json::to_value(Envelope::ok("abc", &host())).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["status"], 200);
        assert_eq!(object["request_id"], "abc");
        assert_eq!(object["host"], "test-host");
        assert!(!object.contains_key("version"));
        assert!(!object.contains_key("data"));
        assert!(!object.contains_key("error"));
    }

    #[test]
    fn version_and_error_round_trip() {
        let json =
            serde_json::to_value(Envelope::ok_with_version("ping", "1.2.3", &host())).unwrap();
        assert_eq!(json["version"], "1.2.3");

        let json =
            serde_json::to_value(Envelope::not_found("-", "/missing not found", &host())).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "/missing not found");
    }

    #[test]
    fn internal_error_is_500_with_message() {
        let envelope = Envelope::internal_error("req-1", "downstream body unreadable", &host());
        assert_eq!(envelope.status, 500);
        assert_eq!(envelope.error.as_deref(), Some("downstream body unreadable"));
    }

    #[test]
    fn data_payload_is_carried() {
        let envelope =
            Envelope::ok("req-2", &host()).with_data(serde_json::json!({ "items": [1, 2, 3] }));
        let json = serde_json::to_value(envelope).unwrap();
        assert_eq!(json["data"]["items"][2], 3);
    }
}
