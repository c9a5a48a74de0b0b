//! Request path and query construction.
//!
//! S3 accepts two ways of naming a bucket:
//!
//! - **Virtual-hosted style**: `bucket.s3.amazonaws.com/key`
//! - **Path style**: `s3.amazonaws.com/bucket/key`
//!
//! The builder picks one per request and produces the final hostname, escaped
//! path, query string and parameter headers.

use std::collections::BTreeMap;

use http::{HeaderMap, HeaderName, HeaderValue};
use s3wire_model::S3Operation;

use crate::encoding::{encode_key, encode_segment};
use crate::params::{ParamLocation, operation_params};
use crate::request::RequestShape;
use crate::validation::is_dns_compatible;

/// How the bucket is carried in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingStyle {
    /// Bucket is the first path segment.
    Path,
    /// Bucket is a hostname label.
    VirtualHosted,
}

/// Choose the addressing style for a bucket.
///
/// Path style is used when forced, when the name cannot form DNS labels, or
/// when a dotted name would be sent over TLS (the extra labels do not match
/// the `*.s3.amazonaws.com` wildcard certificate).
#[must_use]
pub fn addressing_style(bucket: &str, force_path_style: bool, ssl_enabled: bool) -> AddressingStyle {
    if force_path_style {
        return AddressingStyle::Path;
    }
    if !is_dns_compatible(bucket) {
        return AddressingStyle::Path;
    }
    if ssl_enabled && bucket.contains('.') {
        return AddressingStyle::Path;
    }
    AddressingStyle::VirtualHosted
}

/// Builds [`RequestShape`]s against one base endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RequestPathBuilder<'a> {
    base_hostname: &'a str,
    ssl_enabled: bool,
    force_path_style: bool,
}

impl<'a> RequestPathBuilder<'a> {
    /// Create a builder for a base hostname.
    #[must_use]
    pub fn new(base_hostname: &'a str, ssl_enabled: bool, force_path_style: bool) -> Self {
        Self {
            base_hostname,
            ssl_enabled,
            force_path_style,
        }
    }

    /// Address one request.
    ///
    /// The output depends only on the inputs, so identical calls produce
    /// identical shapes.
    #[must_use]
    pub fn build(
        &self,
        operation: S3Operation,
        bucket: Option<&str>,
        key: Option<&str>,
        params: &BTreeMap<String, String>,
    ) -> RequestShape {
        let bucket = bucket.filter(|b| !b.is_empty());
        let mut segments = Vec::with_capacity(2);

        let hostname = match bucket {
            None => self.base_hostname.to_owned(),
            Some(bucket) => {
                let style = addressing_style(bucket, self.force_path_style, self.ssl_enabled);
                tracing::debug!(
                    operation = %operation,
                    bucket = %bucket,
                    style = ?style,
                    "selected addressing style"
                );
                match style {
                    AddressingStyle::Path => {
                        segments.push(encode_segment(bucket));
                        self.base_hostname.to_owned()
                    }
                    AddressingStyle::VirtualHosted => format!("{bucket}.{}", self.base_hostname),
                }
            }
        };

        if let Some(key) = key.filter(|k| !k.is_empty()) {
            segments.push(encode_key(key));
        }

        let mut path = format!("/{}", segments.join("/"));
        let encoded = Self::apply_params(operation, params);
        if !encoded.entries.is_empty() {
            path.push('?');
            path.push_str(&encoded.entries.join("&"));
        }

        RequestShape {
            method: operation.http_method(),
            hostname,
            path,
            query_parameters: encoded.query_parameters,
            headers: encoded.headers,
            ssl_enabled: self.ssl_enabled,
        }
    }

    /// Split caller parameters into encoded query entries and headers.
    fn apply_params(operation: S3Operation, params: &BTreeMap<String, String>) -> EncodedParams {
        let table = operation_params(operation);
        let mut out = EncodedParams::default();

        for sub in table.sub_resources {
            match sub.value {
                Some(value) => out.push_query(sub.key, encode_segment(value)),
                None => {
                    out.entries.push(sub.key.to_owned());
                    out.query_parameters.push((sub.key.to_owned(), String::new()));
                }
            }
        }

        for rule in table.params {
            let Some(value) = params.get(rule.name) else {
                continue;
            };
            match rule.location {
                ParamLocation::Query(name) => out.push_query(name, encode_segment(value)),
                ParamLocation::Header(name) => match HeaderValue::from_str(value) {
                    Ok(v) => {
                        out.headers.insert(HeaderName::from_static(name), v);
                    }
                    Err(_) => {
                        tracing::warn!(
                            operation = %operation,
                            param = rule.name,
                            "skipping parameter with invalid header value"
                        );
                    }
                },
            }
        }

        for name in params.keys() {
            if table.rule(name).is_none() {
                tracing::debug!(
                    operation = %operation,
                    param = %name,
                    "ignoring parameter not accepted by operation"
                );
            }
        }

        out
    }
}

/// Query and header output of one operation's parameter table.
#[derive(Debug, Default)]
struct EncodedParams {
    /// Query string entries, already joined as `key=value` or a bare key.
    entries: Vec<String>,
    query_parameters: Vec<(String, String)>,
    headers: HeaderMap,
}

impl EncodedParams {
    fn push_query(&mut self, key: &str, encoded_value: String) {
        self.entries.push(format!("{key}={encoded_value}"));
        self.query_parameters.push((key.to_owned(), encoded_value));
    }
}
