//! Core listing logic for gls.
//!
//! This module contains the non-rendering pieces used by the layout engines:
//! - [fm]: directory enumeration and the [FileRecord] type.
//! - [formatter]: sizes, modification times, permission strings and link counts.
//! - [text]: code-point based width, truncation and overflow splitting.
//! - [owner]: owner/group resolution for long listings.

pub mod fm;
pub mod formatter;
pub mod owner;
pub mod text;

pub use fm::{FileRecord, read_records, records_with_extension, stat_record};
pub use formatter::{
    format_mod_time, format_size, link_count, mode_permissions, synthesize_permissions,
    total_blocks,
};
pub use owner::{CurrentUser, FixedOwner, OwnerResolver};
pub use text::{display_width, split_overflow, truncate};
