//! The managed server settings.

use serde::{Deserialize, Serialize};

use crate::{BaseUrl, Port};

/// The server settings managed by a [`SettingsStore`](crate::SettingsStore).
///
/// `base_url` starts absent; `port` starts at a default.
///
/// # Examples
///
/// ```
/// use srvconf::{Port, ServerSettings};
///
/// let settings = ServerSettings::default();
/// assert!(settings.base_url.is_none());
/// assert_eq!(settings.port, Port::DEFAULT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    /// The externally visible root address of the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<BaseUrl>,

    /// The TCP port the service binds to.
    pub port: Port,
}

impl ServerSettings {
    /// Settings with no base URL and the given port.
    #[must_use]
    pub const fn with_port(port: Port) -> Self {
        Self {
            base_url: None,
            port,
        }
    }
}
