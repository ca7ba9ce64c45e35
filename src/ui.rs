//! Text layout for gls listings.
//!
//! - [grid]: multi-column layout with continuation lines for long names.
//! - [long]: `ls -l` style table.
//! - [style]: color/icon resolution and output switches.
//! - [icons]: Nerd Font lookup tables.
//! - [entry]: the per-pass projection of records drawn by the grid.
//!
//! Both engines write to any [std::io::Write] sink and never count escape codes
//! toward column widths.

pub mod entry;
pub mod grid;
pub mod icons;
pub mod long;
pub mod style;

pub use entry::{Entry, project};
pub use grid::{GridCell, GridLayout, GridPlan, GridRow};
pub use long::LongLayout;
pub use style::{IconTheme, Style, StyleResolver, Theme};
