//! Filesystem utilities for bundle-params.

pub mod atomic;

pub use atomic::{atomic_write_file, atomic_write_new};
