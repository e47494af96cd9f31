use crate::models::RequestFingerprint;

/// Derives the cache key for a request fingerprint.
///
/// The field order is fixed and must stay identical between live lookups and
/// preloaded template entries, otherwise preloaded entries become
/// unreachable. Pure and infallible: every fingerprint, including the
/// all-empty one, yields a valid 32-character lowercase hex key.
pub fn derive_key(fingerprint: &RequestFingerprint) -> String {
    let RequestFingerprint {
        method,
        scheme,
        destination,
        path,
        query,
        body,
    } = fingerprint;
    let input = format!("{method}{destination}{path}{query}{scheme}{body}");
    format!("{:x}", md5::compute(input.as_bytes()))
}
