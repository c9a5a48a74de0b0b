//! Bucket name checks for virtual-hosted addressing.
//!
//! A bucket can only be moved into the hostname when its name forms valid DNS
//! labels. The check depends on the name alone, never on region or config.

/// Minimum bucket name length.
const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum bucket name length.
const MAX_BUCKET_NAME_LEN: usize = 63;

/// Returns true if `name` can be embedded as hostname labels.
///
/// Rules:
/// - 3-63 characters long
/// - Only lowercase letters, numbers, hyphens, and dots
/// - Must start and end with a letter or number
/// - No consecutive dots (`..`)
/// - Not shaped like an IPv4 address (four all-digit groups, e.g. `192.168.0.1`)
///
/// # Examples
///
/// ```
/// use s3wire_core::validation::is_dns_compatible;
///
/// assert!(is_dns_compatible("my-valid-bucket"));
/// assert!(!is_dns_compatible("My_Bucket"));
/// ```
#[must_use]
pub fn is_dns_compatible(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < MIN_BUCKET_NAME_LEN || bytes.len() > MAX_BUCKET_NAME_LEN {
        return false;
    }

    if !bytes
        .iter()
        .all(|&b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.'))
    {
        return false;
    }

    let is_alnum = |b: &u8| matches!(b, b'a'..=b'z' | b'0'..=b'9');
    if !bytes.first().is_some_and(is_alnum) || !bytes.last().is_some_and(is_alnum) {
        return false;
    }

    if name.contains("..") {
        return false;
    }

    !looks_like_ipv4(name)
}

/// Four dot-separated groups of ASCII digits. Octet ranges are not checked.
fn looks_like_ipv4(name: &str) -> bool {
    let groups: Vec<&str> = name.split('.').collect();
    groups.len() == 4
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit()))
}
