//! The single source of truth for the server settings.
//!
//! [`SettingsStore`] owns the current [`ServerSettings`] and serializes every
//! read and write through one lock, so a reader never observes a combined
//! update half applied. Persistence is delegated to a [`SettingsBackend`];
//! the in-memory state is replaced only after the backend accepted a write,
//! and then by what the backend reports as stored.
//!
//! # Examples
//!
//! ```
//! use srvconf::{BaseUrl, Port, SettingsStore};
//!
//! let store = SettingsStore::in_memory();
//! assert!(store.base_url().is_none());
//! assert_eq!(store.port(), Port::DEFAULT);
//!
//! store.set_port(Port::try_from(8080u16).unwrap()).unwrap();
//! assert_eq!(store.port().value(), 8080);
//! ```

mod memory;

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::{BaseUrl, Port, ServerSettings};

pub use memory::MemoryBackend;

/// Persistence behind a [`SettingsStore`].
///
/// Implementations are only ever called with the store's lock held, so they
/// need no synchronization of their own.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsBackend: Send {
    /// Load previously persisted settings, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or holds
    /// settings that violate the settings invariants.
    fn load(&mut self) -> Result<Option<ServerSettings>>;

    /// Apply `change` to the persisted settings and return what is now
    /// stored.
    ///
    /// The read and the write form one atomic step, so a change made by
    /// another writer to a different field is kept. When nothing was
    /// persisted yet, `change` applies to `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or rejects
    /// the write. Nothing is persisted in that case.
    fn commit(&mut self, change: &SettingsChange, base: &ServerSettings)
        -> Result<ServerSettings>;
}

/// A write to the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChange {
    /// Replace the base URL only.
    BaseUrl(BaseUrl),
    /// Replace the port only.
    Port(Port),
    /// Replace both fields.
    All(ServerSettings),
}

impl SettingsChange {
    /// Apply this change to `settings` in place.
    pub fn apply_to(&self, settings: &mut ServerSettings) {
        match self {
            Self::BaseUrl(base_url) => settings.base_url = Some(base_url.clone()),
            Self::Port(port) => settings.port = *port,
            Self::All(all) => *settings = all.clone(),
        }
    }
}

struct StoreState {
    current: ServerSettings,
    backend: Box<dyn SettingsBackend>,
}

/// Holds the current server settings.
///
/// Values handed out are copies; nothing outside the store gets a mutable
/// reference to the settings.
pub struct SettingsStore {
    state: Mutex<StoreState>,
}

impl SettingsStore {
    /// Create a store with default settings and no persistence.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::in_memory_with(ServerSettings::default())
    }

    /// Create a store with the given initial settings and no persistence.
    #[must_use]
    pub fn in_memory_with(initial: ServerSettings) -> Self {
        Self::from_parts(initial.clone(), Box::new(MemoryBackend::with_settings(initial)))
    }

    /// Open a store over a backend.
    ///
    /// Settings previously persisted by the backend win over `defaults`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot load its settings.
    pub fn open(mut backend: Box<dyn SettingsBackend>, defaults: ServerSettings) -> Result<Self> {
        let current = match backend.load()? {
            Some(stored) => {
                log::debug!("Loaded persisted server settings: {stored:?}");
                stored
            }
            None => {
                log::debug!("No persisted server settings, using defaults: {defaults:?}");
                defaults
            }
        };

        Ok(Self::from_parts(current, backend))
    }

    fn from_parts(current: ServerSettings, backend: Box<dyn SettingsBackend>) -> Self {
        Self {
            state: Mutex::new(StoreState { current, backend }),
        }
    }

    // State is only replaced after a successful save, so a poisoned lock
    // still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current base URL, if one has been set.
    #[must_use]
    pub fn base_url(&self) -> Option<BaseUrl> {
        self.lock().current.base_url.clone()
    }

    /// The current port.
    #[must_use]
    pub fn port(&self) -> Port {
        self.lock().current.port
    }

    /// Both settings, read under a single lock acquisition.
    #[must_use]
    pub fn snapshot(&self) -> ServerSettings {
        self.lock().current.clone()
    }

    /// Replace the base URL.
    ///
    /// The value is trusted; validate it first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write. The stored value
    /// is unchanged in that case.
    pub fn set_base_url(&self, base_url: BaseUrl) -> Result<()> {
        self.update(&SettingsChange::BaseUrl(base_url))
    }

    /// Replace the port.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write. The stored value
    /// is unchanged in that case.
    pub fn set_port(&self, port: Port) -> Result<()> {
        self.update(&SettingsChange::Port(port))
    }

    /// Replace both settings in one write.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write. Neither field is
    /// changed in that case.
    pub fn set_settings(&self, settings: ServerSettings) -> Result<()> {
        self.update(&SettingsChange::All(settings))
    }

    // The backend result also refreshes fields other writers changed.
    fn update(&self, change: &SettingsChange) -> Result<()> {
        let mut state = self.lock();
        let StoreState { current, backend } = &mut *state;
        *current = backend.commit(change, current)?;
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &self.snapshot())
            .finish_non_exhaustive()
    }
}
