//! Scanner module.
//!
//! This module organizes the scanner implementation into focused components:
//! - `core` - Scanner handle, lifecycle operations, and dispatch
//! - `boundary` - Zero-width end-of-token check
//! - `string` - Quoted string literal recognition
//! - `number` - Numeric literal recognition

mod boundary;
mod core;
mod number;
mod string;

pub use self::core::Scanner;
