//! Filesystem utilities for libchange.
//!
//! Result files are written atomically so a crash never leaves a
//! half-written result behind.

pub mod atomic;

pub use atomic::atomic_write_file;
