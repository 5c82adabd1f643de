/// Tracing subscriber setup
///
/// Environment variables:
///   RUST_LOG    - standard env filter (default: "workshop_portfolio=info")
///   LOG_FORMAT  - "text" (default) or "json"

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "workshop_portfolio=info";

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
