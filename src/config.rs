//! Configuration options for gls.
//!
//! Loaded from gls.toml (see [load::Config::default_path]). Every table is optional
//! and falls back to the internal defaults.
//!
//! - [layout]: grid columns, wrap width and gutter.
//! - [display]: icons, colors, permission style and placeholder owner/group.
//! - [load]: reading, parsing and generating the config file.

pub mod display;
pub mod layout;
pub mod load;

pub use display::{Display, Owner};
pub use layout::InternalLayout;
pub(crate) use layout::Layout;
pub use load::{Config, RawConfig};
