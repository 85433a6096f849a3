//! State

use std::sync::Arc;

use restodocks_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Whether session cookies carry the `Secure` attribute.
    pub(crate) secure_cookies: bool,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, secure_cookies: bool) -> Self {
        Self {
            app,
            secure_cookies,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, secure_cookies: bool) -> Arc<Self> {
        Arc::new(Self::new(app, secure_cookies))
    }
}
