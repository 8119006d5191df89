//! Application startup helpers
//!
//! The startup order is explicit: load settings, derive logger options,
//! build the sink, then hand components their wrappers. These helpers cover
//! the pieces every binary embedding this crate repeats: wiring the sink,
//! announcing the effective configuration, and dying loudly when startup
//! fails before the logger exists.

use crate::config::{logger_options, RuntimeSettings};
use crate::core::{ContextLogger, Logger};
use std::error::Error;
use std::process;
use std::sync::Arc;

/// Build the shared sink from settings and return it with a wrapper for the
/// startup phase.
///
/// Components create their own wrappers over the returned sink; the
/// bootstrap wrapper carries the `Main` context label.
pub fn init(settings: &RuntimeSettings) -> (Arc<Logger>, ContextLogger) {
    let sink = Arc::new(logger_options(settings).build());
    let main = ContextLogger::with_context(Arc::clone(&sink), "Main");
    (sink, main)
}

/// Announce the effective runtime configuration.
///
/// Called once from the startup sequence after the sink is up, so the
/// values land on the configured transport like any other record.
pub fn print_configuration(logger: &ContextLogger, settings: &RuntimeSettings) {
    let verbose = if settings.log_local_verbose.is_empty() {
        "not set"
    } else {
        settings.log_local_verbose.as_str()
    };

    logger.log("Application configuration:");
    logger.log(format!("  environment: {}", settings.environment));
    logger.log(format!("  port: {}", settings.port));
    logger.log(format!("  log_level: {}", settings.log_level));
    logger.log(format!("  log_local_verbose: {}", verbose));
    logger.log("");
}

/// Report a fatal startup error and exit.
///
/// Startup can fail before the structured logger exists, so the report goes
/// to stderr: the error itself, then each link of its cause chain.
pub fn startup_failure(error: &dyn Error) -> ! {
    eprintln!("Failed to start application: {}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("Caused by: {}", cause);
        source = cause.source();
    }

    process::exit(1);
}
