//! Logger setup for the browser and native builds.

use log::LevelFilter;

/// Install the logger for this target. Safe to call more than once; later
/// calls leave the first logger in place.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    console_error_panic_hook::set_once();
    if let Some(level) = level.to_level() {
        if console_log::init_with_level(level).is_err() {
            log::debug!("logger already installed");
        }
    }
}

/// Install the logger for this target. `RUST_LOG` overrides `level`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
    if result.is_err() {
        log::debug!("logger already installed");
    }
}
