use crate::signing::sign_payload;

/// An API key / secret pair issued by the exchange.
///
/// The secret is only ever read by the request signer; the `Debug` impl
/// redacts it so credentials can appear in logs safely.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Create credentials from environment variables.
    ///
    /// Reads `BITKUB_API_KEY` and `BITKUB_API_SECRET`.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let api_key = std::env::var("BITKUB_API_KEY")?;
        let api_secret = std::env::var("BITKUB_API_SECRET")?;
        Ok(Self::new(api_key, api_secret))
    }

    /// The public key identifier sent in the `X-BTK-APIKEY` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request payload with the account secret.
    pub fn sign(&self, payload: &str) -> String {
        sign_payload(payload, &self.api_secret)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
