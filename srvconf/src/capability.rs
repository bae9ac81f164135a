//! Capabilities required by each configuration operation.
//!
//! Authorization itself happens outside this crate. Operations only
//! declare what they need; a [`Grants`] set answers whether a caller
//! holding it may proceed.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A named permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// May replace the base URL.
    SetBaseUrl,
    /// May read the base URL.
    ViewBaseUrl,
    /// May replace the port.
    SetPort,
    /// May read the port.
    ViewPort,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::SetBaseUrl,
        Self::ViewBaseUrl,
        Self::SetPort,
        Self::ViewPort,
    ];

    /// The wire name of this capability.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SetBaseUrl => "CONFIGURATION_SET_BASE_URL",
            Self::ViewBaseUrl => "CONFIGURATION_VIEW_BASE_URL",
            Self::SetPort => "CONFIGURATION_SET_PORT",
            Self::ViewPort => "CONFIGURATION_VIEW_PORT",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = Error;

    /// Parses a wire name, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|cap| cap.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Validation {
                field: "capability".into(),
                message: format!("unknown capability '{wanted}'"),
            })
    }
}

/// A facade operation, for capability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read the base URL.
    GetBaseUrl,
    /// Replace the base URL.
    SetBaseUrl,
    /// Read the port.
    GetPort,
    /// Replace the port.
    SetPort,
    /// Replace both settings.
    SetServerSettings,
    /// Read both settings.
    ViewSettings,
}

impl Operation {
    /// Capabilities a caller must hold, all of them, to run this operation.
    #[must_use]
    pub const fn required_capabilities(self) -> &'static [Capability] {
        match self {
            Self::GetBaseUrl => &[Capability::ViewBaseUrl],
            Self::SetBaseUrl => &[Capability::SetBaseUrl],
            Self::GetPort => &[Capability::ViewPort],
            Self::SetPort => &[Capability::SetPort],
            Self::SetServerSettings => &[Capability::SetBaseUrl, Capability::SetPort],
            Self::ViewSettings => &[Capability::ViewBaseUrl, Capability::ViewPort],
        }
    }
}

/// The capabilities held by a caller.
///
/// # Examples
///
/// ```
/// use srvconf::capability::{Capability, Grants, Operation};
///
/// let grants: Grants = [Capability::SetPort].into_iter().collect();
/// assert!(grants.permits(Operation::SetPort));
/// assert!(!grants.permits(Operation::SetServerSettings));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grants {
    held: BTreeSet<Capability>,
}

impl Grants {
    /// A grant set holding every capability.
    #[must_use]
    pub fn all() -> Self {
        Capability::ALL.into_iter().collect()
    }

    /// Parse a comma-separated list of capability names.
    ///
    /// Empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error for the first unknown name.
    pub fn parse_list(list: &str) -> Result<Self, Error> {
        list.split(',')
            .filter(|name| !name.trim().is_empty())
            .map(str::parse::<Capability>)
            .collect()
    }

    /// Whether `capability` is held.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.held.contains(&capability)
    }

    /// Whether every capability `operation` requires is held.
    #[must_use]
    pub fn permits(&self, operation: Operation) -> bool {
        operation
            .required_capabilities()
            .iter()
            .all(|cap| self.contains(*cap))
    }

    /// Required capabilities of `operation` that are not held.
    #[must_use]
    pub fn missing(&self, operation: Operation) -> Vec<Capability> {
        operation
            .required_capabilities()
            .iter()
            .copied()
            .filter(|cap| !self.contains(*cap))
            .collect()
    }
}

impl FromIterator<Capability> for Grants {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

impl Extend<Capability> for Grants {
    fn extend<I: IntoIterator<Item = Capability>>(&mut self, iter: I) {
        self.held.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_names_round_trip() {
        for cap in Capability::ALL {
            assert_eq!(cap.as_str().parse::<Capability>().unwrap(), cap);
        }
        assert_eq!(
            " configuration_view_port ".parse::<Capability>().unwrap(),
            Capability::ViewPort
        );
        assert!("CONFIGURATION_DELETE".parse::<Capability>().is_err());
    }

    #[test]
    fn test_single_field_operations() {
        let grants: Grants = [Capability::ViewBaseUrl].into_iter().collect();
        assert!(grants.permits(Operation::GetBaseUrl));
        assert!(!grants.permits(Operation::SetBaseUrl));
        assert!(!grants.permits(Operation::GetPort));
    }

    #[test]
    fn test_combined_requires_both_set_capabilities() {
        let only_url: Grants = [Capability::SetBaseUrl].into_iter().collect();
        assert!(!only_url.permits(Operation::SetServerSettings));
        assert_eq!(
            only_url.missing(Operation::SetServerSettings),
            vec![Capability::SetPort]
        );

        let both: Grants = [Capability::SetBaseUrl, Capability::SetPort]
            .into_iter()
            .collect();
        assert!(both.permits(Operation::SetServerSettings));
    }

    #[test]
    fn test_all_permits_everything() {
        let grants = Grants::all();
        for op in [
            Operation::GetBaseUrl,
            Operation::SetBaseUrl,
            Operation::GetPort,
            Operation::SetPort,
            Operation::SetServerSettings,
            Operation::ViewSettings,
        ] {
            assert!(grants.permits(op), "{op:?}");
        }
    }

    #[test]
    fn test_parse_list() {
        let grants =
            Grants::parse_list("CONFIGURATION_SET_PORT, CONFIGURATION_VIEW_PORT,").unwrap();
        assert!(grants.permits(Operation::SetPort));
        assert!(grants.permits(Operation::GetPort));
        assert!(!grants.permits(Operation::GetBaseUrl));

        assert_eq!(Grants::parse_list("").unwrap(), Grants::default());
        assert!(Grants::parse_list("CONFIGURATION_SET_PORT,bogus").is_err());
    }
}
