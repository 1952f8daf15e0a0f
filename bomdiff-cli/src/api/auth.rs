//! OAuth 1.0a request signing (token-based authentication)
//!
//! NetSuite TBA uses HMAC-SHA256 signatures carried in the `Authorization`
//! header with the account id as realm. The realm is not part of the signature.

use anyhow::{Result, anyhow};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use urlencoding::encode;

use crate::config::Credentials;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA256";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 20;

/// Signs outgoing requests with the consumer and token secrets
#[derive(Clone)]
pub struct OAuthSigner {
    realm: String,
    consumer_key: String,
    consumer_secret: String,
    token_id: String,
    token_secret: String,
}

impl OAuthSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            realm: credentials.realm.clone(),
            consumer_key: credentials.consumer_key.clone(),
            consumer_secret: credentials.consumer_secret.clone(),
            token_id: credentials.token_id.clone(),
            token_secret: credentials.token_secret.clone(),
        }
    }

    /// Build an `Authorization` header value with a fresh nonce and timestamp
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<String> {
        let nonce = generate_nonce();
        let timestamp = chrono::Utc::now().timestamp();
        self.authorization_header_with(method, url, query, &nonce, timestamp)
    }

    /// Deterministic variant used by `authorization_header`
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        query: &[(&str, &str)],
        nonce: &str,
        timestamp: i64,
    ) -> Result<String> {
        let timestamp = timestamp.to_string();
        let oauth_params: Vec<(&str, &str)> = vec![
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_token", self.token_id.as_str()),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_version", OAUTH_VERSION),
        ];

        let base = signature_base_string(method, url, &oauth_params, query);
        let signature = self.sign(&base)?;

        let mut parts = vec![format!("realm=\"{}\"", encode(&self.realm))];
        for (key, value) in &oauth_params {
            parts.push(format!("{}=\"{}\"", key, encode(value)));
        }
        parts.push(format!("oauth_signature=\"{}\"", encode(&signature)));

        Ok(format!("OAuth {}", parts.join(", ")))
    }

    fn sign(&self, base: &str) -> Result<String> {
        let key = format!(
            "{}&{}",
            encode(&self.consumer_secret),
            encode(&self.token_secret)
        );
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|e| anyhow!("Invalid signing key: {}", e))?;
        mac.update(base.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

/// `METHOD&enc(url)&enc(sorted params)` per RFC 5849 section 3.4.1
pub fn signature_base_string(
    method: &str,
    url: &str,
    oauth_params: &[(&str, &str)],
    query: &[(&str, &str)],
) -> String {
    let mut pairs: Vec<(String, String)> = oauth_params
        .iter()
        .chain(query.iter())
        .map(|(k, v)| (encode(k).into_owned(), encode(v).into_owned()))
        .collect();
    pairs.sort();

    let normalized = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&normalized)
    )
}

fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
