//! Request logging thresholds applied once at startup.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use crate::config::ServerConfig;

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(1_000);

pub(super) fn apply_runtime_config(config: &ServerConfig) {
    SLOW_REQUEST_THRESHOLD_MS.store(config.logging.slow_request_threshold_ms, Ordering::Relaxed);
}

/// Requests taking longer than this are logged as slow.
pub(super) fn slow_request_threshold() -> Duration {
    Duration::from_millis(SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed))
}
