//! Client configuration.
//!
//! Provides [`ClientConfig`], the immutable per-client settings that drive
//! endpoint resolution and addressing-style selection. Values can be given
//! through the builder or loaded from environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::Region;

/// Per-client addressing configuration.
///
/// A config is fixed once a client is constructed and is shared read-only by
/// every call that client issues.
///
/// # Examples
///
/// ```
/// use s3wire_model::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.region.as_str(), "us-east-1");
/// assert!(config.ssl_enabled);
/// assert!(!config.force_path_style);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region the client talks to.
    #[builder(default, setter(into))]
    pub region: Region,

    /// Whether requests go over TLS.
    #[builder(default = true)]
    pub ssl_enabled: bool,

    /// Always place the bucket in the path, never in the hostname.
    #[builder(default = false)]
    pub force_path_style: bool,

    /// Explicit base hostname (e.g. `"localhost:9000"`) replacing the
    /// region-derived one.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            ssl_enabled: true,
            force_path_style: false,
            endpoint: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` | falls back to `AWS_DEFAULT_REGION`, then `us-east-1` |
    /// | `S3_SSL_ENABLED` | `true` |
    /// | `S3_FORCE_PATH_STYLE` | `false` |
    /// | `S3_ENDPOINT` | *(unset)* |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            config.region = Region::new(v);
        }
        if let Some(v) = lookup("S3_SSL_ENABLED") {
            config.ssl_enabled = parse_bool(&v);
        }
        if let Some(v) = lookup("S3_FORCE_PATH_STYLE") {
            config.force_path_style = parse_bool(&v);
        }
        if let Some(v) = lookup("S3_ENDPOINT") {
            if !v.is_empty() {
                config.endpoint = Some(v);
            }
        }

        config
    }

    /// URI scheme matching [`ssl_enabled`](Self::ssl_enabled).
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        if self.ssl_enabled { "https" } else { "http" }
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
