//! Session token formatting, signing, and verification.
//!
//! A token is `rd_v1_<session uuid>_<expiry seconds>.<signature>` where the
//! signature is an unpadded base64url HMAC-SHA256 over everything before the
//! final `.`.

use std::{fmt, str::FromStr};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

/// Session token identifier prefix.
pub const SESSION_TOKEN_PREFIX: &str = "rd";

/// Length of a generated signing key.
pub const SESSION_KEY_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTokenVersion {
    V1,
}

impl SessionTokenVersion {
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl FromStr for SessionTokenVersion {
    type Err = SessionTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(SessionTokenError::UnsupportedVersion),
        }
    }
}

/// HMAC key used to sign session cookies.
pub struct SessionSigningKey {
    bytes: Vec<u8>,
}

impl SessionSigningKey {
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Generate a random key for this process only.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = vec![0_u8; SESSION_KEY_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self { bytes }
    }

    fn mac(&self, payload: &str) -> Result<HmacSha256, SessionTokenError> {
        let mut mac =
            HmacSha256::new_from_slice(&self.bytes).map_err(|_| SessionTokenError::InvalidKey)?;

        mac.update(payload.as_bytes());

        Ok(mac)
    }
}

impl fmt::Debug for SessionSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSigningKey(**redacted**)")
    }
}

impl Drop for SessionSigningKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Claims carried inside a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub session_uuid: Uuid,
    pub version: SessionTokenVersion,
    pub expires_at: Timestamp,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionTokenError {
    #[error("session token format is invalid")]
    InvalidFormat,

    #[error("session token uses an unsupported version")]
    UnsupportedVersion,

    #[error("session token signature does not verify")]
    InvalidSignature,

    #[error("session token has expired")]
    Expired,

    #[error("session signing key is unusable")]
    InvalidKey,
}

/// Sign `claims` into a cookie-safe token string.
///
/// # Errors
///
/// Returns an error if the signing key cannot be used.
pub fn sign_session_token(
    claims: &SessionClaims,
    key: &SessionSigningKey,
) -> Result<String, SessionTokenError> {
    let payload = format!(
        "{SESSION_TOKEN_PREFIX}_{}_{}_{}",
        claims.version.segment(),
        claims.session_uuid.simple(),
        claims.expires_at.as_second()
    );

    let signature = URL_SAFE_NO_PAD.encode(key.mac(&payload)?.finalize().into_bytes());

    Ok(format!("{payload}.{signature}"))
}

/// Verify a token's signature and expiry at `now`.
///
/// The signature is checked before the payload is parsed, so nothing from an
/// unsigned payload is trusted.
///
/// # Errors
///
/// Returns an error if the token is malformed, forged, or expired.
pub fn verify_session_token(
    token: &str,
    key: &SessionSigningKey,
    now: Timestamp,
) -> Result<SessionClaims, SessionTokenError> {
    let (payload, signature) = token
        .rsplit_once('.')
        .ok_or(SessionTokenError::InvalidFormat)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| SessionTokenError::InvalidSignature)?;

    key.mac(payload)?
        .verify_slice(&signature)
        .map_err(|_| SessionTokenError::InvalidSignature)?;

    let claims = parse_payload(payload)?;

    if claims.expires_at <= now {
        return Err(SessionTokenError::Expired);
    }

    Ok(claims)
}

fn parse_payload(payload: &str) -> Result<SessionClaims, SessionTokenError> {
    let mut parts = payload.splitn(4, '_');

    let prefix = parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let version = parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let session_uuid = parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let expires_at = parts.next().ok_or(SessionTokenError::InvalidFormat)?;

    if prefix != SESSION_TOKEN_PREFIX {
        return Err(SessionTokenError::InvalidFormat);
    }

    let version = SessionTokenVersion::from_str(version)?;

    let session_uuid =
        Uuid::try_parse(session_uuid).map_err(|_| SessionTokenError::InvalidFormat)?;

    let expires_at = expires_at
        .parse::<i64>()
        .ok()
        .and_then(|seconds| Timestamp::from_second(seconds).ok())
        .ok_or(SessionTokenError::InvalidFormat)?;

    Ok(SessionClaims {
        session_uuid,
        version,
        expires_at,
    })
}
