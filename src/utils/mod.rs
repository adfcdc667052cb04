//! Utility functions shared across layers.
//!
//! - [`text`] - Display title and capitalization helpers

pub mod text;
