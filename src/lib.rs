//! Internal library crate for gls.
//!
//! The shipped application is the `gls` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! This API is only used to build the `gls` binary and is not considered a library for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
