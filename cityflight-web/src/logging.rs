//! Console logging for the hosts.
//!
//! Native builds install a `tracing` subscriber (which also receives the core
//! crate's `log` records). On wasm the browser console is reached through
//! miniquad's logging macros instead.

#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "info";

/// Filter directive to use: the configured level, falling back to the default.
pub fn filter_directive(configured: &str) -> &str {
    let trimmed = configured.trim();
    if trimmed.is_empty() {
        DEFAULT_FILTER
    } else {
        trimmed
    }
}

/// `RUST_LOG` wins over the configured level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(configured_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(configured_level)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    // A second init (tests, re-entry) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging(configured_level: &str) {
    miniquad::info!("log level: {}", filter_directive(configured_level));
}

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::info!("{}", message);
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("{}", message);
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::warn!("{}", message);
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("{}", message);
}

#[cfg(target_arch = "wasm32")]
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_panic_hook() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_level_falls_back_to_default() {
        assert_eq!(filter_directive(""), DEFAULT_FILTER);
        assert_eq!(filter_directive("   "), DEFAULT_FILTER);
        assert_eq!(filter_directive(" debug "), "debug");
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging("debug,cityflight_core=trace");
        init_logging("warn");
        tracing::info!("still logging after second init");
    }
}
