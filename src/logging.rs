// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// We log through the `log` facade (log::info!, log::warn!, ...) and let
// env_logger print to stderr. stdout stays reserved for the report itself,
// so `copy-auditor audit example.com --json | jq` keeps working.
//
// RUST_LOG is read first; the --log-level flag then overrides the level for
// our own crate. Noisy dependencies are capped at warn.
// =============================================================================

use log::LevelFilter;

pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Warn);
    builder.filter_module("hyper", LevelFilter::Warn);
    builder.filter_module("copy_auditor", level);

    // try_init: a second call (e.g. from tests) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
