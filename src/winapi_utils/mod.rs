//! Safe wrappers around Windows API calls.
//!
//! This module provides safe Rust abstractions over the unsafe WinAPI
//! cursor functions used by the Windows pointer backend.

pub mod cursor;

pub use cursor::*;
