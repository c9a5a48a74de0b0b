//! Common AWS type definitions.

use std::fmt;

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region(String);

impl Region {
    /// Region used when none is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the classic `us-east-1` region, which S3 serves from the
    /// global endpoint. An empty region is treated the same way.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.is_empty() || self.0 == Self::DEFAULT
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(region: &str) -> Self {
        Self::new(region)
    }
}

impl From<String> for Region {
    fn from(region: String) -> Self {
        Self(region)
    }
}
