//! Auth service.

use std::{fmt, sync::Arc};

use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::auth::{
    AuthServiceError, IssuedSession, SESSION_TTL_SECONDS, Session, SessionClaims,
    SessionSigningKey, SessionState, SessionTokenVersion, sign_session_token,
    verify_session_token,
};

/// Secrets the session gate is configured with.
#[derive(Clone, Default)]
pub struct AuthSettings {
    pub admin_password: Option<String>,
    pub session_secret: Option<String>,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("admin_password", &self.admin_password.as_ref().map(|_| "**redacted**"))
            .field("session_secret", &self.session_secret.as_ref().map(|_| "**redacted**"))
            .finish()
    }
}

/// Stateless password gate issuing signed session tokens.
#[derive(Clone)]
pub struct PasswordAuthService {
    password: Option<Arc<Zeroizing<String>>>,
    key: Arc<SessionSigningKey>,
}

impl PasswordAuthService {
    #[must_use]
    pub fn new(settings: AuthSettings) -> Self {
        let AuthSettings {
            admin_password,
            session_secret,
        } = settings;

        let password = admin_password
            .filter(|password| !password.is_empty())
            .map(|password| Arc::new(Zeroizing::new(password)));

        if password.is_none() {
            warn!("no admin password configured; every login attempt will be rejected");
        }

        let key = match session_secret.filter(|secret| !secret.is_empty()) {
            Some(secret) => SessionSigningKey::from_bytes(secret.into_bytes()),
            None => {
                warn!("no session secret configured; sessions will not survive a restart");

                SessionSigningKey::generate()
            }
        };

        Self {
            password,
            key: Arc::new(key),
        }
    }

    /// Check `password` and issue a session valid from `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidPassword`] on any mismatch, including
    /// when no admin password is configured.
    pub fn authenticate_at(
        &self,
        password: &str,
        now: Timestamp,
    ) -> Result<IssuedSession, AuthServiceError> {
        if !self.password_matches(password) {
            warn!("rejected admin login attempt");

            return Err(AuthServiceError::InvalidPassword);
        }

        let claims = SessionClaims {
            session_uuid: Uuid::now_v7(),
            version: SessionTokenVersion::V1,
            expires_at: now.checked_add(SignedDuration::from_secs(SESSION_TTL_SECONDS))?,
        };

        let token = sign_session_token(&claims, &self.key)?;

        Ok(IssuedSession {
            token,
            session: Session {
                uuid: claims.session_uuid,
                expires_at: claims.expires_at,
            },
        })
    }

    /// Resolve the session carried by `token` as of `now`.
    #[must_use]
    pub fn session_state_at(&self, token: &str, now: Timestamp) -> SessionState {
        match verify_session_token(token, &self.key, now) {
            Ok(claims) => SessionState::Authenticated(Session {
                uuid: claims.session_uuid,
                expires_at: claims.expires_at,
            }),
            Err(error) => {
                debug!(%error, "session token rejected");

                SessionState::Anonymous
            }
        }
    }

    fn password_matches(&self, submitted: &str) -> bool {
        self.password.as_ref().is_some_and(|expected| {
            bool::from(submitted.as_bytes().ct_eq(expected.as_bytes()))
        })
    }
}

impl fmt::Debug for PasswordAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordAuthService")
            .field("password", &self.password.as_ref().map(|_| "**redacted**"))
            .field("key", &self.key)
            .finish()
    }
}

impl AuthService for PasswordAuthService {
    fn authenticate(&self, password: &str) -> Result<IssuedSession, AuthServiceError> {
        self.authenticate_at(password, Timestamp::now())
    }

    fn session_state(&self, token: &str) -> SessionState {
        self.session_state_at(token, Timestamp::now())
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Exchange the admin password for a signed session.
    fn authenticate(&self, password: &str) -> Result<IssuedSession, AuthServiceError>;

    /// Resolve the session carried by a cookie value.
    fn session_state(&self, token: &str) -> SessionState;
}
