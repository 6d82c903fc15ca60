//! Filesystem utilities for coverkit.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
