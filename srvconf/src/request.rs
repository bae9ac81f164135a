//! Mutation request bodies.
//!
//! Requests arrive as JSON with camelCase field names. Field values are
//! kept raw here; validation happens in the facade so that every caller
//! gets the same failure messages.

use serde::Deserialize;

use crate::capability::Operation;
use crate::error::{Error, Result};

/// Body of a base URL update: `{"baseUrl": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseUrlUpdate {
    /// The candidate base URL.
    pub base_url: String,
}

/// Body of a port update: `{"port": 8080}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortUpdate {
    /// The candidate port. Wider than `u16` so out-of-range values reach
    /// the validator instead of failing deserialization.
    pub port: i64,
}

/// Body of a combined update: `{"baseUrl": "...", "port": 8080}`.
///
/// Both fields are required; a missing one is reported as invalid input
/// by [`ServerSettingsUpdate::into_parts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettingsUpdate {
    /// The candidate base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// The candidate port.
    #[serde(default)]
    pub port: Option<i64>,
}

impl ServerSettingsUpdate {
    /// Create a combined update with both fields present.
    #[must_use]
    pub fn new(base_url: impl Into<String>, port: i64) -> Self {
        Self {
            base_url: Some(base_url.into()),
            port: Some(port),
        }
    }

    /// Split into the two candidates, in the order they are validated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first absent field.
    pub fn into_parts(self) -> Result<(String, i64)> {
        let base_url = self.base_url.ok_or_else(|| Error::MissingField {
            field: "baseUrl".into(),
        })?;
        let port = self.port.ok_or_else(|| Error::MissingField {
            field: "port".into(),
        })?;
        Ok((base_url, port))
    }
}

/// A parsed mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRequest {
    /// Replace the base URL.
    BaseUrl(BaseUrlUpdate),
    /// Replace the port.
    Port(PortUpdate),
    /// Replace both settings together.
    ServerSettings(ServerSettingsUpdate),
}

impl MutationRequest {
    /// Parse a body, inferring the request form from the fields present.
    ///
    /// A body carrying both fields, or neither, is treated as a combined
    /// update so that missing fields are reported by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestBody`] if the body is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use srvconf::request::MutationRequest;
    ///
    /// let request = MutationRequest::from_json(r#"{"port": 8080}"#).unwrap();
    /// assert!(matches!(request, MutationRequest::Port(_)));
    /// ```
    pub fn from_json(body: &str) -> Result<Self> {
        let update: ServerSettingsUpdate = serde_json::from_str(body)?;
        Ok(match update {
            ServerSettingsUpdate {
                base_url: Some(base_url),
                port: None,
            } => Self::BaseUrl(BaseUrlUpdate { base_url }),
            ServerSettingsUpdate {
                base_url: None,
                port: Some(port),
            } => Self::Port(PortUpdate { port }),
            update => Self::ServerSettings(update),
        })
    }

    /// The operation this request performs, for capability checks.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::BaseUrl(_) => Operation::SetBaseUrl,
            Self::Port(_) => Operation::SetPort,
            Self::ServerSettings(_) => Operation::SetServerSettings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_base_url_update() {
        let update: BaseUrlUpdate =
            serde_json::from_str(r#"{"baseUrl": "https://example.com"}"#).unwrap();
        assert_eq!(update.base_url, "https://example.com");
    }

    #[test]
    fn test_parse_port_update_keeps_out_of_range() {
        let update: PortUpdate = serde_json::from_str(r#"{"port": 70000}"#).unwrap();
        assert_eq!(update.port, 70000);

        let update: PortUpdate = serde_json::from_str(r#"{"port": -1}"#).unwrap();
        assert_eq!(update.port, -1);
    }

    #[test]
    fn test_combined_into_parts() {
        let update = ServerSettingsUpdate::new("http://a", 80);
        assert_eq!(update.into_parts().unwrap(), ("http://a".to_string(), 80));
    }

    #[test]
    fn test_combined_missing_port() {
        let update = ServerSettingsUpdate {
            base_url: Some("http://a".into()),
            port: None,
        };
        let err = update.into_parts().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.field(), Some("port"));
    }

    #[test]
    fn test_combined_missing_base_url_reported_first() {
        let err = ServerSettingsUpdate::default().into_parts().unwrap_err();
        assert_eq!(err.field(), Some("baseUrl"));
    }

    #[test]
    fn test_from_json_infers_form() {
        assert!(matches!(
            MutationRequest::from_json(r#"{"baseUrl": "http://a"}"#).unwrap(),
            MutationRequest::BaseUrl(_)
        ));
        assert!(matches!(
            MutationRequest::from_json(r#"{"port": 80}"#).unwrap(),
            MutationRequest::Port(_)
        ));
        assert!(matches!(
            MutationRequest::from_json(r#"{"baseUrl": "http://a", "port": 80}"#).unwrap(),
            MutationRequest::ServerSettings(_)
        ));
        assert!(matches!(
            MutationRequest::from_json("{}").unwrap(),
            MutationRequest::ServerSettings(_)
        ));
    }

    #[test]
    fn test_operation_follows_form() {
        let operation = |body: &str| MutationRequest::from_json(body).unwrap().operation();
        assert_eq!(operation(r#"{"baseUrl": "http://a"}"#), Operation::SetBaseUrl);
        assert_eq!(operation(r#"{"port": 80}"#), Operation::SetPort);
        assert_eq!(operation("{}"), Operation::SetServerSettings);
    }

    #[test]
    fn test_malformed_body() {
        let err = MutationRequest::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::RequestBody(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = MutationRequest::from_json(r#"{"port": "eighty"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
