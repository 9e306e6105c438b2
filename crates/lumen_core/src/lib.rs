//! Core utilities and types for lumen
//!
//! This crate provides the error type, HTML escaping and CSS value helpers
//! shared by the lumen component crates.

pub mod errors;
pub mod html;

pub use errors::{LumenError, Result};
pub use html::{html_escape, ClassList, Length};
