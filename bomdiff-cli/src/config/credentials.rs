//! NetSuite token-based authentication credentials

use crate::error::BomDiffError;

pub const REALM_VAR: &str = "NS_ACCOUNT_REALM";
pub const DOMAIN_VAR: &str = "NS_REST_DOMAIN";
pub const CONSUMER_KEY_VAR: &str = "NS_CONSUMER_KEY";
pub const CONSUMER_SECRET_VAR: &str = "NS_CONSUMER_SECRET";
pub const TOKEN_ID_VAR: &str = "NS_TOKEN_ID";
pub const TOKEN_SECRET_VAR: &str = "NS_TOKEN_SECRET";

/// The six values needed to sign a request
#[derive(Clone)]
pub struct Credentials {
    pub realm: String,
    /// Base REST domain, e.g. `https://1234567.suitetalk.api.netsuite.com`
    pub domain: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token_id: String,
    pub token_secret: String,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self, BomDiffError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup; blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BomDiffError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |key: &'static str| -> String {
            match lookup(key).map(|v| v.trim().to_string()) {
                Some(v) if !v.is_empty() => v,
                _ => {
                    missing.push(key);
                    String::new()
                }
            }
        };

        let creds = Self {
            realm: read(REALM_VAR),
            domain: read(DOMAIN_VAR),
            consumer_key: read(CONSUMER_KEY_VAR),
            consumer_secret: read(CONSUMER_SECRET_VAR),
            token_id: read(TOKEN_ID_VAR),
            token_secret: read(TOKEN_SECRET_VAR),
        };

        if !missing.is_empty() {
            return Err(BomDiffError::MissingCredentials(missing));
        }
        Ok(creds)
    }

    /// Domain without trailing slash, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.domain.trim_end_matches('/')
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("realm", &self.realm)
            .field("domain", &self.domain)
            .field("consumer_key", &mask_secret(Some(&self.consumer_key)))
            .field("consumer_secret", &mask_secret(Some(&self.consumer_secret)))
            .field("token_id", &mask_secret(Some(&self.token_id)))
            .field("token_secret", &mask_secret(Some(&self.token_secret)))
            .finish()
    }
}

/// Render a secret as `abcd…wxyz (len N)` for debug output
pub fn mask_secret(value: Option<&str>) -> String {
    let v = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return "(missing)".to_string(),
    };
    let chars: Vec<char> = v.chars().collect();
    if chars.len() <= 8 {
        return format!("**** (len {})", chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{} (len {})", head, tail, chars.len())
}
