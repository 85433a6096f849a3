//! Auth Config

use std::fmt;

use clap::Args;
use restodocks_app::auth::AuthSettings;

/// Deployment environment.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum AppEnv {
    /// Local development; cookies are sent over plain HTTP.
    Development,

    /// Production; cookies carry the `Secure` attribute.
    Production,
}

/// Admin session settings.
#[derive(Args)]
pub struct AuthConfig {
    /// Shared administrator password; logins always fail when unset
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,

    /// Session signing secret; a random per-process key is used when unset
    #[arg(long, env = "ADMIN_SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,

    /// Deployment environment (development, production)
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = AppEnv::Development)]
    pub app_env: AppEnv,
}

impl AuthConfig {
    /// Whether session cookies must only travel over HTTPS.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        matches!(self.app_env, AppEnv::Production)
    }

    /// Secrets handed to the session gate.
    #[must_use]
    pub fn settings(&self) -> AuthSettings {
        AuthSettings {
            admin_password: self.admin_password.clone(),
            session_secret: self.session_secret.clone(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_password", &self.admin_password.as_ref().map(|_set| "**redacted**"))
            .field("session_secret", &self.session_secret.as_ref().map(|_set| "**redacted**"))
            .field("app_env", &self.app_env)
            .finish()
    }
}
