//! Request signing
//!
//! Kalshi authenticates REST calls with an RSA-PSS-SHA256 signature over
//! `timestamp_ms + METHOD + path`, sent alongside the API key id and the
//! timestamp as request headers.

use crate::credentials::Credentials;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::pss::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{RandomizedSigner, SignatureEncoding};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to sign request: {0}")]
    SigningError(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// Signs outgoing requests with the account's RSA key.
pub struct RequestSigner {
    api_key_id: String,
    signing_key: SigningKey<Sha256>,
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key_id: credentials.api_key_id().to_string(),
            signing_key: SigningKey::<Sha256>::new(credentials.private_key().clone()),
        }
    }

    /// Sign `timestamp_ms + method + path` and return the base64 signature.
    ///
    /// `path` is the URL path only — the query string is not covered by the
    /// signature.
    pub fn sign(&self, timestamp_ms: u64, method: &str, path: &str) -> Result<String> {
        let message = format!("{}{}{}", timestamp_ms, method, path);

        let signature = self
            .signing_key
            .try_sign_with_rng(&mut rand::thread_rng(), message.as_bytes())
            .map_err(|e| AuthError::SigningError(e.to_string()))?;

        Ok(BASE64.encode(signature.to_vec()))
    }

    /// Build the authentication headers for a request.
    pub fn headers(&self, method: &str, path: &str) -> Result<HashMap<String, String>> {
        let timestamp = Self::current_timestamp_ms();
        let signature = self.sign(timestamp, method, path)?;

        let mut headers = HashMap::new();
        headers.insert("KALSHI-ACCESS-KEY".to_string(), self.api_key_id.clone());
        headers.insert("KALSHI-ACCESS-SIGNATURE".to_string(), signature);
        headers.insert("KALSHI-ACCESS-TIMESTAMP".to_string(), timestamp.to_string());

        Ok(headers)
    }

    /// Current Unix timestamp in milliseconds.
    pub fn current_timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs8::EncodePrivateKey;
    use rsa::RsaPrivateKey;

    fn test_signer() -> RequestSigner {
        let mut rng = rand::thread_rng();
        let key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        let pem = key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF).unwrap();
        let creds = Credentials::from_pem("test-key-id", &pem).unwrap();
        RequestSigner::new(&creds)
    }

    #[test]
    fn test_sign_produces_base64() {
        let signer = test_signer();
        let signature = signer
            .sign(1234567890000, "GET", "/trade-api/v2/portfolio/balance")
            .unwrap();

        assert!(!signature.is_empty());
        assert!(BASE64.decode(&signature).is_ok());
    }

    #[test]
    fn test_headers_shape() {
        let signer = test_signer();
        let headers = signer.headers("GET", "/trade-api/v2/events").unwrap();

        assert_eq!(headers.get("KALSHI-ACCESS-KEY").unwrap(), "test-key-id");
        assert!(headers.contains_key("KALSHI-ACCESS-SIGNATURE"));
        let timestamp: u64 = headers
            .get("KALSHI-ACCESS-TIMESTAMP")
            .unwrap()
            .parse()
            .unwrap();
        assert!(timestamp > 0);
    }

    #[test]
    fn test_signatures_are_randomized() {
        // PSS is randomized; two signatures over the same message differ.
        let signer = test_signer();
        let a = signer.sign(1, "GET", "/x").unwrap();
        let b = signer.sign(1, "GET", "/x").unwrap();
        assert_ne!(a, b);
    }
}
