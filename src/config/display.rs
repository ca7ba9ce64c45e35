//! Display configuration options for gls
//!
//! This module defines the `[display]` and `[owner]` tables read from the gls.toml
//! configuration file.

use crate::core::{CurrentUser, FixedOwner, OwnerResolver};
use crate::ui::style::Theme;

use serde::Deserialize;

/// Display configuration options
///
/// Controls whether icons and color codes are written, and whether long listings
/// show the host's permission bits or the fixed per-type permission strings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    icons: bool,
    colors: bool,
    permission_bits: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            icons: true,
            colors: true,
            permission_bits: false,
        }
    }
}

impl Display {
    pub fn icons(&self) -> bool {
        self.icons
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    pub fn permission_bits(&self) -> bool {
        self.permission_bits
    }

    /// Output switches handed to the layout engines.
    pub fn theme(&self) -> Theme {
        Theme::new(self.colors, self.icons)
    }
}

/// Placeholder owner/group for long listings.
///
/// When neither is set, the current login name is shown in both columns.
/// A missing half of the pair falls back to the current login name.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Owner {
    user: Option<String>,
    group: Option<String>,
}

impl Owner {
    /// Builds the resolver described by this table.
    pub fn resolver(&self) -> Box<dyn OwnerResolver> {
        match (&self.user, &self.group) {
            (None, None) => Box::new(CurrentUser::new()),
            (user, group) => {
                let current = CurrentUser::new();
                Box::new(FixedOwner::new(
                    user.as_deref().unwrap_or(current.name()),
                    group.as_deref().unwrap_or(current.name()),
                ))
            }
        }
    }
}
