//! Admin session handling over HTTP.

pub(crate) mod cookie;
pub(crate) mod filter;
pub(crate) mod handlers;
pub(crate) mod session;
