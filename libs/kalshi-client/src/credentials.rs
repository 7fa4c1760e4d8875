//! API credentials
//!
//! A [`Credentials`] holds the API key id and the parsed RSA private key in
//! memory. Inline PEM content is parsed directly; it is never written to a
//! temporary file on the way to the signer.

use crate::error::{ClientError, Result};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use tracing::debug;

/// Environment variable holding the API key id.
pub const API_KEY_ID_ENV: &str = "KALSHI_API_KEY_ID";

/// Environment variable holding the RSA private key, either as inline PEM
/// content or as a path to a PEM file.
pub const PRIVATE_KEY_ENV: &str = "KALSHI_PRIVATE_KEY_PEM";

/// Authenticated identity for the exchange API.
#[derive(Clone)]
pub struct Credentials {
    api_key_id: String,
    private_key: RsaPrivateKey,
}

impl Credentials {
    /// Build credentials from an API key id and PEM-encoded private key.
    ///
    /// Accepts PKCS#8 (`BEGIN PRIVATE KEY`) and PKCS#1
    /// (`BEGIN RSA PRIVATE KEY`) encodings.
    pub fn from_pem(api_key_id: impl Into<String>, pem: &str) -> Result<Self> {
        let api_key_id = api_key_id.into();
        if api_key_id.trim().is_empty() {
            return Err(ClientError::Credentials(
                "API key id must not be empty".to_string(),
            ));
        }

        let private_key = parse_private_key_pem(pem)?;

        Ok(Self {
            api_key_id,
            private_key,
        })
    }

    /// Build credentials from a key file on disk.
    pub fn from_key_file(api_key_id: impl Into<String>, path: &str) -> Result<Self> {
        let pem = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Credentials(format!("failed to read private key file {}: {}", path, e))
        })?;
        Self::from_pem(api_key_id, &pem)
    }

    /// Load credentials from the environment (and `.env` if present).
    ///
    /// `KALSHI_PRIVATE_KEY_PEM` may hold inline PEM content or a path to a
    /// PEM file; inline content is recognized by its PEM armor.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key_id = std::env::var(API_KEY_ID_ENV).map_err(|_| {
            ClientError::Credentials(format!("{} is not set", API_KEY_ID_ENV))
        })?;
        let key_value = std::env::var(PRIVATE_KEY_ENV).map_err(|_| {
            ClientError::Credentials(format!("{} is not set", PRIVATE_KEY_ENV))
        })?;

        if key_value.contains("-----BEGIN") {
            debug!("Loading private key from inline PEM content");
            Self::from_pem(api_key_id, &key_value)
        } else {
            debug!("Loading private key from file {}", key_value);
            Self::from_key_file(api_key_id, &key_value)
        }
    }

    pub fn api_key_id(&self) -> &str {
        &self.api_key_id
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }
}

// Keep key material out of debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key_id", &self.api_key_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

fn parse_private_key_pem(pem: &str) -> Result<RsaPrivateKey> {
    if pem.trim().is_empty() {
        return Err(ClientError::Credentials(
            "private key must not be empty".to_string(),
        ));
    }

    if let Ok(key) = RsaPrivateKey::from_pkcs8_pem(pem) {
        return Ok(key);
    }

    RsaPrivateKey::from_pkcs1_pem(pem)
        .map_err(|e| ClientError::Credentials(format!("invalid RSA private key: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs8::EncodePrivateKey;
    use std::io::Write;

    fn test_key_pem() -> String {
        let mut rng = rand::thread_rng();
        let key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_from_pem() {
        let pem = test_key_pem();
        let creds = Credentials::from_pem("key-id-123", &pem).unwrap();
        assert_eq!(creds.api_key_id(), "key-id-123");
    }

    #[test]
    fn test_empty_key_id_rejected() {
        let pem = test_key_pem();
        let result = Credentials::from_pem("", &pem);
        assert!(matches!(result, Err(ClientError::Credentials(_))));
    }

    #[test]
    fn test_empty_pem_rejected() {
        let result = Credentials::from_pem("key-id-123", "");
        assert!(matches!(result, Err(ClientError::Credentials(_))));
    }

    #[test]
    fn test_garbage_pem_rejected() {
        let result = Credentials::from_pem("key-id-123", "not a pem at all");
        assert!(matches!(result, Err(ClientError::Credentials(_))));
    }

    #[test]
    fn test_from_key_file() {
        let pem = test_key_pem();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(pem.as_bytes()).unwrap();

        let creds =
            Credentials::from_key_file("key-id-123", file.path().to_str().unwrap()).unwrap();
        assert_eq!(creds.api_key_id(), "key-id-123");
    }

    #[test]
    fn test_missing_key_file_rejected() {
        let result = Credentials::from_key_file("key-id-123", "/nonexistent/key.pem");
        assert!(matches!(result, Err(ClientError::Credentials(_))));
    }

    #[test]
    fn test_from_env_missing_vars_fails() {
        std::env::remove_var(API_KEY_ID_ENV);
        std::env::remove_var(PRIVATE_KEY_ENV);

        let result = Credentials::from_env();
        assert!(matches!(result, Err(ClientError::Credentials(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let pem = test_key_pem();
        let creds = Credentials::from_pem("key-id-123", &pem).unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("BEGIN"));
    }
}
