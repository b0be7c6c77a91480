//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter. Initialization is guarded by
//! `OnceLock` so repeated calls in tests are harmless.

use std::sync::OnceLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub fn init_tracing(default_filter: &str, json: bool) {
    TRACING_INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        let registry = tracing_subscriber::registry().with(filter);
        if json {
            let _ = registry
                .with(tracing_subscriber::fmt::layer().json().with_target(true))
                .try_init();
        } else {
            let _ = registry.with(tracing_subscriber::fmt::layer()).try_init();
        }
    });
}
