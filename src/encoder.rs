use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha1::{Digest, Sha1};

/// Length of every generated short code.
pub const SHORT_CODE_LEN: usize = 8;

/// Derive the short code for `url`.
///
/// SHA-1 over `url + salt`, base64-encoded, with every non-alphanumeric
/// character removed and the result cut to [`SHORT_CODE_LEN`] characters.
/// The same input and salt always give the same code.
pub fn generate_short_url(url: &str, salt: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(url.as_bytes());
    hasher.update(salt.as_bytes());
    let encoded = STANDARD.encode(hasher.finalize());

    encoded
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(SHORT_CODE_LEN)
        .collect()
}
