//! Project-wide constants.

/// Status code of the response produced when nothing handles an event.
pub const NO_ACTION_STATUS: u16 = 400;

/// Body of the response produced when nothing handles an event.
pub const NO_ACTION_BODY: &str = "No action specified";

/// How a missing action name renders in log lines.
pub const UNDEFINED_ACTION: &str = "undefined";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";
