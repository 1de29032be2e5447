use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Request signature the metrics API expects in its `X-Signature` header:
/// `base64(HMAC-SHA256(secret, "{timestamp}.{method}.{uri}"))`.
pub fn sign_request(secret: &str, timestamp: &str, method: &str, uri: &str) -> String {
    let message = format!("{timestamp}.{method}.{uri}");
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
