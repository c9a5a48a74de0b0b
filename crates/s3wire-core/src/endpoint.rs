//! Region to hostname resolution.

use s3wire_model::{ClientConfig, Region};

/// Hostname used for the default region.
pub const DEFAULT_HOSTNAME: &str = "s3.amazonaws.com";

/// Resolve the base S3 hostname for a region.
///
/// An unset or empty region, and `us-east-1`, map to the global endpoint.
/// Every other region maps to `s3-{region}.amazonaws.com`.
///
/// # Examples
///
/// ```
/// use s3wire_core::endpoint::resolve_hostname;
///
/// assert_eq!(resolve_hostname(None), "s3.amazonaws.com");
/// assert_eq!(resolve_hostname(Some("us-west-1")), "s3-us-west-1.amazonaws.com");
/// ```
#[must_use]
pub fn resolve_hostname(region: Option<&str>) -> String {
    match region {
        None => DEFAULT_HOSTNAME.to_owned(),
        Some(r) if r.is_empty() || r == Region::DEFAULT => DEFAULT_HOSTNAME.to_owned(),
        Some(r) => format!("s3-{r}.amazonaws.com"),
    }
}

/// The resolved base endpoint of a client.
///
/// Request building may prefix the hostname with a bucket label; the
/// endpoint itself never changes after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base hostname, optionally with a port.
    pub hostname: String,
}

impl Endpoint {
    /// Resolve the endpoint for a config.
    ///
    /// An explicit `endpoint` override is used verbatim.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let hostname = match &config.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => resolve_hostname(Some(config.region.as_str())),
        };
        tracing::debug!(
            region = %config.region,
            hostname = %hostname,
            "resolved S3 endpoint"
        );
        Self { hostname }
    }
}
