//! The entry point for reading and changing the server settings.
//!
//! [`ConfigurationFacade`] validates candidates with [`SettingsValidator`],
//! applies them to the [`SettingsStore`], and reports every failure as a
//! [`Failure`] carrying a caller-facing message. Nothing here recovers from
//! an error: the first failure encountered is the one returned, and a
//! failed operation never applies part of its input.
//!
//! # Examples
//!
//! ```
//! use srvconf::{ConfigurationFacade, ErrorKind, SettingsStore};
//!
//! let facade = ConfigurationFacade::new(SettingsStore::in_memory());
//! assert_eq!(facade.get_base_url().unwrap_err().kind(), ErrorKind::NotFound);
//!
//! let confirmation = facade.set_base_url("https://example.com").unwrap();
//! assert_eq!(confirmation.message, "The base URL was updated.");
//! assert_eq!(facade.get_base_url().unwrap().as_str(), "https://example.com");
//! ```

use thiserror::Error;

use crate::error::{Error, ErrorKind};
use crate::request::MutationRequest;
use crate::store::SettingsStore;
use crate::validator::SettingsValidator;
use crate::{BaseUrl, Port, ServerSettings};

/// Confirmation after the base URL was replaced.
pub const BASE_URL_UPDATED: &str = "The base URL was updated.";
/// Failure of a base URL update.
pub const BASE_URL_NOT_UPDATED: &str = "Could not update the base URL of the service.";
/// The base URL was queried before it was ever set.
pub const BASE_URL_UNDEFINED: &str = "No value for baseUrl has been defined yet.";
/// Confirmation after the port was replaced.
pub const PORT_UPDATED: &str = "The port was updated.";
/// Failure of a port update.
pub const PORT_NOT_UPDATED: &str = "Could not update the port of the service.";
/// Confirmation after a combined update.
pub const SETTINGS_UPDATED: &str = "The server settings were updated successfully.";
/// Failure of a combined update.
pub const SETTINGS_NOT_UPDATED: &str =
    "Server settings cannot be saved because the submitted form contains errors!";

/// A failed facade operation.
///
/// The message is meant for the caller; the cause is kept for logs and for
/// structured field errors.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Failure {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Error,
}

impl Failure {
    /// Wrap `cause` under a caller-facing message.
    #[must_use]
    pub fn new(message: impl Into<String>, cause: Error) -> Self {
        Self {
            kind: cause.kind(),
            message: message.into(),
            cause,
        }
    }

    /// The failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The caller-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying error.
    #[must_use]
    pub const fn cause(&self) -> &Error {
        &self.cause
    }

    /// The request field the failure refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.cause.field()
    }
}

/// Result of a facade operation.
pub type Outcome<T> = std::result::Result<T, Failure>;

/// A successful update: what to tell the caller and what was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<T> {
    /// The caller-facing message.
    pub message: &'static str,
    /// The value as it was stored.
    pub applied: T,
}

impl<T> Confirmation<T> {
    const fn new(message: &'static str, applied: T) -> Self {
        Self { message, applied }
    }

    /// Transform the applied value, keeping the message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Confirmation<U> {
        Confirmation {
            message: self.message,
            applied: f(self.applied),
        }
    }
}

/// The value stored by [`ConfigurationFacade::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A new base URL.
    BaseUrl(BaseUrl),
    /// A new port.
    Port(Port),
    /// Both settings.
    Settings(ServerSettings),
}

/// Validated access to the server settings.
#[derive(Debug, Default)]
pub struct ConfigurationFacade {
    store: SettingsStore,
}

impl ConfigurationFacade {
    /// Create a facade over `store`.
    #[must_use]
    pub const fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// The current base URL.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::NotFound`] if no base URL was ever set.
    pub fn get_base_url(&self) -> Outcome<BaseUrl> {
        self.store.base_url().ok_or_else(|| {
            Failure::new(
                BASE_URL_UNDEFINED,
                Error::NotFound {
                    resource: "baseUrl".into(),
                },
            )
        })
    }

    /// Validate and store a new base URL.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidInput`] if the candidate is not an
    /// absolute URL, or [`ErrorKind::StoreFault`] if the store rejects it.
    pub fn set_base_url(&self, candidate: &str) -> Outcome<Confirmation<BaseUrl>> {
        let fail = |e| Failure::new(BASE_URL_NOT_UPDATED, e);

        let base_url = SettingsValidator::validate_base_url(candidate).map_err(fail)?;
        self.store.set_base_url(base_url.clone()).map_err(fail)?;
        Ok(Confirmation::new(BASE_URL_UPDATED, base_url))
    }

    /// The current port. Never fails; the default applies until one is set.
    ///
    /// # Errors
    ///
    /// None in practice; the result type keeps every read uniform.
    pub fn get_port(&self) -> Outcome<Port> {
        Ok(self.store.port())
    }

    /// Validate and store a new port.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidInput`] if the candidate is outside
    /// `[1, 65535]`, or [`ErrorKind::StoreFault`] if the store rejects it.
    pub fn set_port(&self, candidate: i64) -> Outcome<Confirmation<Port>> {
        let fail = |e| Failure::new(PORT_NOT_UPDATED, e);

        let port = SettingsValidator::validate_port(candidate).map_err(fail)?;
        self.store.set_port(port).map_err(fail)?;
        Ok(Confirmation::new(PORT_UPDATED, port))
    }

    /// Validate both candidates, then store them in a single write.
    ///
    /// The base URL is validated first. If either candidate is invalid,
    /// neither is applied.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidInput`] for the first invalid
    /// candidate, or [`ErrorKind::StoreFault`] if the store rejects the
    /// write.
    pub fn set_server_settings(
        &self,
        base_url: &str,
        port: i64,
    ) -> Outcome<Confirmation<ServerSettings>> {
        let fail = |e| Failure::new(SETTINGS_NOT_UPDATED, e);

        let settings = ServerSettings {
            base_url: Some(SettingsValidator::validate_base_url(base_url).map_err(fail)?),
            port: SettingsValidator::validate_port(port).map_err(fail)?,
        };
        self.store.set_settings(settings.clone()).map_err(fail)?;
        Ok(Confirmation::new(SETTINGS_UPDATED, settings))
    }

    /// Run a parsed mutation request.
    ///
    /// # Errors
    ///
    /// As for the operation the request maps to. A combined request missing
    /// a field fails with [`ErrorKind::InvalidInput`].
    pub fn apply(&self, request: MutationRequest) -> Outcome<Confirmation<Applied>> {
        match request {
            MutationRequest::BaseUrl(update) => self
                .set_base_url(&update.base_url)
                .map(|c| c.map(Applied::BaseUrl)),
            MutationRequest::Port(update) => {
                self.set_port(update.port).map(|c| c.map(Applied::Port))
            }
            MutationRequest::ServerSettings(update) => {
                let (base_url, port) = update
                    .into_parts()
                    .map_err(|e| Failure::new(SETTINGS_NOT_UPDATED, e))?;
                self.set_server_settings(&base_url, port)
                    .map(|c| c.map(Applied::Settings))
            }
        }
    }

    /// Both settings as one consistent snapshot.
    #[must_use]
    pub fn settings(&self) -> ServerSettings {
        self.store.snapshot()
    }
}

impl From<SettingsStore> for ConfigurationFacade {
    fn from(store: SettingsStore) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ServerSettingsUpdate;
    use crate::store::MockSettingsBackend;
    use std::sync::Arc;
    use std::thread;

    fn facade_with(base_url: &str, port: u16) -> ConfigurationFacade {
        ConfigurationFacade::new(SettingsStore::in_memory_with(ServerSettings {
            base_url: Some(BaseUrl::parse(base_url).unwrap()),
            port: Port::try_from(port).unwrap(),
        }))
    }

    fn failing_facade() -> ConfigurationFacade {
        let mut backend = MockSettingsBackend::new();
        backend.expect_load().returning(|| Ok(None));
        backend.expect_commit().returning(|_, _| {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only volume",
            )))
        });
        let store = SettingsStore::open(Box::new(backend), ServerSettings::default()).unwrap();
        ConfigurationFacade::new(store)
    }

    #[test]
    fn test_base_url_not_found_before_set() {
        let facade = ConfigurationFacade::default();
        let failure = facade.get_base_url().unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::NotFound);
        assert_eq!(failure.message(), BASE_URL_UNDEFINED);
    }

    #[test]
    fn test_port_never_not_found() {
        let facade = ConfigurationFacade::default();
        assert_eq!(facade.get_port().unwrap(), Port::DEFAULT);
    }

    #[test]
    fn test_set_base_url_reads_back_exactly() {
        let facade = ConfigurationFacade::default();
        let confirmation = facade.set_base_url("https://example.com").unwrap();
        assert_eq!(confirmation.message, BASE_URL_UPDATED);
        assert_eq!(confirmation.applied.as_str(), "https://example.com");
        assert_eq!(facade.get_base_url().unwrap().as_str(), "https://example.com");
    }

    #[test]
    fn test_set_base_url_invalid() {
        let facade = facade_with("http://old", 80);
        for bad in ["", "   ", "not-a-url", "example.com/path"] {
            let failure = facade.set_base_url(bad).unwrap_err();
            assert_eq!(failure.kind(), ErrorKind::InvalidInput, "{bad:?}");
            assert_eq!(failure.message(), BASE_URL_NOT_UPDATED);
            assert_eq!(failure.field(), Some("baseUrl"));
        }
        assert_eq!(facade.get_base_url().unwrap().as_str(), "http://old");
    }

    #[test]
    fn test_set_port_bounds() {
        let facade = ConfigurationFacade::default();
        assert_eq!(facade.set_port(1).unwrap().applied.value(), 1);
        assert_eq!(facade.set_port(65535).unwrap().applied.value(), 65535);

        for bad in [0, -1, 65536, i64::MAX] {
            let failure = facade.set_port(bad).unwrap_err();
            assert_eq!(failure.kind(), ErrorKind::InvalidInput);
            assert_eq!(failure.message(), PORT_NOT_UPDATED);
            assert_eq!(failure.field(), Some("port"));
        }
        assert_eq!(facade.get_port().unwrap().value(), 65535);
    }

    #[test]
    fn test_set_port_idempotent() {
        let facade = ConfigurationFacade::default();
        let first = facade.set_port(443).unwrap();
        let after_once = facade.settings();
        let second = facade.set_port(443).unwrap();

        assert_eq!(first, second);
        assert_eq!(facade.settings(), after_once);
        assert_eq!(facade.get_port().unwrap().value(), 443);
    }

    #[test]
    fn test_combined_invalid_url_applies_nothing() {
        let facade = facade_with("http://old", 80);
        let before = facade.settings();

        let failure = facade.set_server_settings("not-a-url", 8080).unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::InvalidInput);
        assert_eq!(failure.message(), SETTINGS_NOT_UPDATED);
        assert_eq!(failure.field(), Some("baseUrl"));
        assert_eq!(facade.settings(), before);
    }

    #[test]
    fn test_combined_invalid_port_applies_nothing() {
        let facade = facade_with("http://old", 80);
        let before = facade.settings();

        let failure = facade
            .set_server_settings("https://new.example", 0)
            .unwrap_err();
        assert_eq!(failure.field(), Some("port"));
        assert_eq!(facade.settings(), before);
    }

    #[test]
    fn test_combined_reports_base_url_first() {
        let facade = ConfigurationFacade::default();
        let failure = facade.set_server_settings("", 0).unwrap_err();
        assert_eq!(failure.field(), Some("baseUrl"));
    }

    #[test]
    fn test_combined_success() {
        let facade = facade_with("http://old", 80);
        let confirmation = facade
            .set_server_settings(" https://new.example ", 8443)
            .unwrap();
        assert_eq!(confirmation.message, SETTINGS_UPDATED);
        assert_eq!(facade.settings(), confirmation.applied);
        assert_eq!(facade.get_base_url().unwrap().as_str(), "https://new.example");
        assert_eq!(facade.get_port().unwrap().value(), 8443);
    }

    #[test]
    fn test_store_fault_leaves_settings_unchanged() {
        let facade = failing_facade();

        let failure = facade.set_base_url("https://example.com").unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::StoreFault);
        assert_eq!(failure.message(), BASE_URL_NOT_UPDATED);

        let failure = facade.set_port(8080).unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::StoreFault);

        let failure = facade
            .set_server_settings("https://example.com", 8080)
            .unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::StoreFault);
        assert_eq!(failure.message(), SETTINGS_NOT_UPDATED);

        assert_eq!(facade.settings(), ServerSettings::default());
    }

    #[test]
    fn test_validation_precedes_store() {
        // An invalid candidate must not reach a failing backend.
        let facade = failing_facade();
        let failure = facade.set_port(0).unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_apply_dispatch() {
        let facade = ConfigurationFacade::default();

        let applied = facade
            .apply(MutationRequest::from_json(r#"{"port": 9000}"#).unwrap())
            .unwrap();
        assert_eq!(applied.message, PORT_UPDATED);
        assert_eq!(applied.applied, Applied::Port(Port::try_from(9000u16).unwrap()));

        let applied = facade
            .apply(MutationRequest::ServerSettings(ServerSettingsUpdate::new(
                "http://a.example",
                81,
            )))
            .unwrap();
        assert!(matches!(applied.applied, Applied::Settings(_)));
        assert_eq!(facade.get_port().unwrap().value(), 81);
    }

    #[test]
    fn test_apply_missing_field() {
        let facade = facade_with("http://old", 80);
        let request = MutationRequest::ServerSettings(ServerSettingsUpdate {
            base_url: None,
            port: Some(8080),
        });
        let failure = facade.apply(request).unwrap_err();
        assert_eq!(failure.kind(), ErrorKind::InvalidInput);
        assert_eq!(failure.message(), SETTINGS_NOT_UPDATED);
        assert_eq!(failure.field(), Some("baseUrl"));
        assert_eq!(facade.get_port().unwrap().value(), 80);
    }

    #[test]
    fn test_concurrent_combined_updates_end_in_one_payload() {
        let facade = Arc::new(ConfigurationFacade::default());
        let payloads: Vec<(String, u16)> = (0..8u16)
            .map(|i| (format!("https://node-{i}.example"), 20_000 + i))
            .collect();

        let handles: Vec<_> = payloads
            .iter()
            .cloned()
            .map(|(url, port)| {
                let facade = Arc::clone(&facade);
                thread::spawn(move || {
                    for _ in 0..25 {
                        facade.set_server_settings(&url, i64::from(port)).unwrap();
                        let seen = facade.settings();
                        let seen_url = seen.base_url.map(BaseUrl::into_string);
                        let pair = (seen_url.unwrap_or_default(), seen.port.value());
                        let expected = format!("https://node-{}.example", pair.1 - 20_000);
                        assert_eq!(pair.0, expected, "mixed settings observed: {pair:?}");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let end = facade.settings();
        let end = (
            end.base_url.map(BaseUrl::into_string).unwrap_or_default(),
            end.port.value(),
        );
        assert!(payloads.contains(&end));
    }
}
