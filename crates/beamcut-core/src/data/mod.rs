//! Data models consumed from the host
//!
//! This module provides:
//! - Tool definitions
//! - Tool controllers (tool plus feeds, rapids and spindle speed)

pub mod tools;
