//! Helpers for gls.
//!
//! - Resolving the home directory for the default config path
//! - Clamping numeric settings to safe ranges

use std::path::PathBuf;

/// Home directory of the current user, if it can be determined.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Safely clamp a numeric setting.
///
/// Out-of-range values are clamped and reported once on stderr with the setting name.
pub fn clamp_setting(name: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        eprintln!(
            "[Warning] {}={} out of range ({}..={}), clamped to {}",
            name, value, min, max, clamped
        );
    }
    clamped
}
