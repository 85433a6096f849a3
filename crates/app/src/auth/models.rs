//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

/// Lifetime of an admin session.
pub const SESSION_TTL_SECONDS: i64 = 86_400;

/// A verified admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uuid: Uuid,
    pub expires_at: Timestamp,
}

/// Session issuance result carrying the cookie value.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: Session,
}

/// Whether a request carries a valid admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
