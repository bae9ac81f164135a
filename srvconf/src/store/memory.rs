//! In-process settings backend.

use crate::error::Result;
use crate::ServerSettings;

use super::{SettingsBackend, SettingsChange};

/// A backend that keeps settings in memory and never fails.
///
/// Settings do not outlive the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    settings: Option<ServerSettings>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds settings.
    #[must_use]
    pub fn with_settings(settings: ServerSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&mut self) -> Result<Option<ServerSettings>> {
        Ok(self.settings.clone())
    }

    fn commit(&mut self, change: &SettingsChange, base: &ServerSettings) -> Result<ServerSettings> {
        let next = self.settings.get_or_insert_with(|| base.clone());
        change.apply_to(next);
        Ok(next.clone())
    }
}
