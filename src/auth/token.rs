//! Signed admin bearer tokens
//!
//! Tokens are stateless: claims JSON signed with Ed25519, encoded as
//! `base64url(claims).base64url(signature)`. Every request verifies the
//! token independently; there is no session registry to share or expire.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use ed25519_dalek::{Signature, Signer, SigningKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{ServerError, ServerResult};

const ADMIN_ROLE: &str = "admin";

/// Claims carried inside an admin token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Username the token was issued to
    pub sub: String,
    pub role: String,
    /// Expiry, unix seconds
    pub exp: i64,
}

/// Token signer wrapper
///
/// Wraps an Ed25519 signing key derived from the configured secret.
#[derive(Clone)]
pub struct TokenSigner {
    signing_key: SigningKey,
}

impl TokenSigner {
    /// Derive the signing key from a secret string (SHA-256 of the secret
    /// is the 32-byte seed)
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        let seed: [u8; 32] = Sha256::digest(secret.as_bytes()).into();
        Self::from_bytes(&seed)
    }

    /// Create signer from a raw 32-byte seed
    #[must_use]
    pub fn from_bytes(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Issue an admin token valid for `ttl`
    pub fn issue(&self, username: &str, ttl: Duration) -> ServerResult<String> {
        let claims = AdminClaims {
            sub: username.to_string(),
            role: ADMIN_ROLE.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };
        self.issue_claims(&claims)
    }

    fn issue_claims(&self, claims: &AdminClaims) -> ServerResult<String> {
        let payload = serde_json::to_vec(claims)
            .map_err(|e| ServerError::Internal(format!("claims serialization: {e}")))?;
        let signature = self.signing_key.sign(&payload);
        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature.to_bytes())
        ))
    }

    /// Verify a presented token: signature, expiry, and admin role.
    /// Any failure is `Unauthorized`; callers never learn which check
    /// tripped beyond the message.
    pub fn verify(&self, token: &str) -> ServerResult<AdminClaims> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| unauthorized("malformed token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| unauthorized("malformed token"))?;
        let signature_bytes = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| unauthorized("malformed token"))?;
        let signature = Signature::from_slice(&signature_bytes)
            .map_err(|_| unauthorized("malformed token"))?;

        self.signing_key
            .verifying_key()
            .verify_strict(&payload, &signature)
            .map_err(|_| unauthorized("invalid token signature"))?;

        let claims: AdminClaims =
            serde_json::from_slice(&payload).map_err(|_| unauthorized("malformed token claims"))?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(unauthorized("token expired"));
        }
        if claims.role != ADMIN_ROLE {
            return Err(unauthorized("admin role required"));
        }

        Ok(claims)
    }
}

fn unauthorized(msg: &str) -> ServerError {
    ServerError::Unauthorized(msg.to_string())
}
