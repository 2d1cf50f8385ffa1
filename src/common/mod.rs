//! Common types and utilities shared across mbtree.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types

pub mod config;
pub mod error;

pub use config::{DEFAULT_FAN_OUT, MIN_FAN_OUT};
pub use error::{Error, Result};
