//! Filesystem utilities for themecfg.

pub mod atomic;

pub use atomic::atomic_write_file;
