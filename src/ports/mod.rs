// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the domain and the format-specific adapters.

pub mod parser;

// Re-export commonly used types
pub use parser::DocumentParser;
