//! Known resource type names.

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// The namespaces Provs stores records under.
///
/// Typed clients are built from this enum rather than free strings so a typo
/// cannot silently create a new namespace. The byte-level protocol stays
/// string-keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Coffees,
    Order,
    SecretManager,
    Secret,
    WriteOnly,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Coffees,
        ResourceType::Order,
        ResourceType::SecretManager,
        ResourceType::Secret,
        ResourceType::WriteOnly,
    ];

    /// Directory / namespace name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Coffees => "coffees",
            ResourceType::Order => "order",
            ResourceType::SecretManager => "secret_manager",
            ResourceType::Secret => "secret",
            ResourceType::WriteOnly => "write_only_test",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .iter()
            .copied()
            .find(|rt| rt.as_str() == s)
            .ok_or_else(|| {
                StoreError::InvalidInput(format!(
                    "Unknown resource type '{}' (expected one of: {})",
                    s,
                    ResourceType::ALL
                        .iter()
                        .map(|rt| rt.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for rt in ResourceType::ALL {
            assert_eq!(rt.as_str().parse::<ResourceType>().unwrap(), rt);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "cofees".parse::<ResourceType>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(err.to_string().contains("coffees"));
    }

    #[test]
    fn test_display_uses_namespace_names() {
        assert_eq!(ResourceType::WriteOnly.to_string(), "write_only_test");
        assert_eq!(ResourceType::SecretManager.to_string(), "secret_manager");
    }
}
