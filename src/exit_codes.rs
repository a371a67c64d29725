//! Exit code constants for the bundle-params CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, malformed assignment, internal parameter)
//! - 2: Storage failure (file could not be read or written)
//! - 3: Format failure (document could not be parsed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed assignments, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Storage failure: a parameter set, bundle, or config file could not be read or written.
pub const STORAGE_FAILURE: i32 = 2;

/// Format failure: file content could not be deserialized.
pub const FORMAT_FAILURE: i32 = 3;
