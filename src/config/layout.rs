//! Grid layout settings.
//!
//! [Layout] is deserialized from the `[layout]` table of gls.toml, and
//! [InternalLayout] holds the clamped values the grid engine actually uses.

use crate::ui::grid::{DEFAULT_COLUMNS, GUTTER, MAX_NAME_WIDTH};
use crate::utils::clamp_setting;

use serde::Deserialize;

/// Smallest wrap width that still leaves room for an ellipsized tail.
pub const MIN_NAME_WIDTH: usize = 4;
pub const MAX_COLUMNS: usize = 32;
pub const MAX_GUTTER: usize = 16;

/// Layout options
/// # Examples
/// ```toml
/// [layout]
/// columns = 4
/// max_name_width = 24
/// gutter = 2
/// ```
#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct Layout {
    columns: usize,
    max_name_width: usize,
    gutter: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            columns: DEFAULT_COLUMNS,
            max_name_width: MAX_NAME_WIDTH,
            gutter: GUTTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalLayout {
    columns: usize,
    max_name_width: usize,
    gutter: usize,
}

impl From<Layout> for InternalLayout {
    fn from(l: Layout) -> Self {
        Self {
            columns: clamp_setting("layout.columns", l.columns, 1, MAX_COLUMNS),
            max_name_width: clamp_setting(
                "layout.max_name_width",
                l.max_name_width,
                MIN_NAME_WIDTH,
                usize::MAX,
            ),
            gutter: clamp_setting("layout.gutter", l.gutter, 0, MAX_GUTTER),
        }
    }
}

impl Default for InternalLayout {
    fn default() -> Self {
        Self::from(Layout::default())
    }
}

impl InternalLayout {
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn max_name_width(&self) -> usize {
        self.max_name_width
    }

    #[inline]
    pub fn gutter(&self) -> usize {
        self.gutter
    }
}
