//! Request signing for authenticated endpoints.
//!
//! Bitkub authenticates a POST by an HMAC-SHA256 signature over the JSON
//! request body, keyed with the account secret. The signed text is the
//! envelope exactly as transmitted (parameters followed by `ts`), so the
//! serialization here must stay byte-identical to what goes on the wire.

use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::api::Params;
use crate::credentials::Credentials;
use crate::error::Result;

type HmacSha256 = Hmac<Sha256>;

/// Compute the lowercase-hex HMAC-SHA256 of `payload` keyed by `secret`.
///
/// Must be bit-exact reproducible: the exchange recomputes the same digest
/// to verify the request.
pub fn sign_payload(payload: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Current time in milliseconds since the Unix epoch.
pub fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}

/// Append `ts` to the envelope, sign its canonical JSON text, then append
/// `sig`. The signature never covers itself.
pub fn signed_envelope(credentials: &Credentials, mut params: Params, ts: u64) -> Result<Params> {
    params.insert("ts".to_string(), Value::from(ts));
    let payload = serde_json::to_string(&params)?;
    let sig = credentials.sign(&payload);
    params.insert("sig".to_string(), Value::String(sig));
    Ok(params)
}
