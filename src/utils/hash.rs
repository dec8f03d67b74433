//! Content fingerprinting utilities.

use xxhash_rust::xxh3::xxh3_64;

/// Compute the content fingerprint for a section body.
///
/// The fingerprint is the xxh3-64 hash of the body bytes rendered as 16
/// lowercase hex digits. Byte-identical bodies always produce the same
/// fingerprint, which is the cross-document identity key for movement
/// detection.
#[must_use]
pub fn content_fingerprint(body: &str) -> String {
    format!("{:016x}", xxh3_64(body.as_bytes()))
}
