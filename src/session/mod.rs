// src/session/mod.rs

//! Session layer root module.
//!
//! This module organizes the interactive front end around one diagram:
//! - Command parsing (plain words or JSON)
//! - Synchronous dispatch into the grid model and renderer
//! - Transient status messages
//! - SVG export to files, data URIs and the clipboard

pub mod command;
pub mod status;
pub mod clipboard;
pub mod export;
pub mod controller;
pub mod runner;
pub mod tests;

pub use clipboard::Clipboard;
pub use controller::{CopyResult, Response, Session};
