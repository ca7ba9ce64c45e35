//! Miscellaneous utility functions for gls.
//!
//! - [cli]: argument parsing into [cli::DisplayFlags] and a [cli::CliAction].
//! - [helpers]: home directory lookup and setting clamps.

pub mod cli;
pub mod helpers;

pub use helpers::{clamp_setting, get_home};
