//! Listing dispatcher for gls.
//!
//! Turns a [ListRequest] into records and hands them to the grid or long layout.
//!
//! The path argument is classified the way `ls` users expect:
//! - a directory lists its contents, or itself with `-d`
//! - `*.ext` lists matching files in the current directory, `dir/*.ext` in `dir`
//! - any other existing path lists that single entry
//! - anything else is a `NotFound` error

use crate::config::Config;
use crate::core::{FileRecord, read_records, records_with_extension, stat_record};
use crate::ui::{GridLayout, IconTheme, LongLayout, project};
use crate::utils::cli::{DisplayFlags, ListRequest};

use chrono::{DateTime, FixedOffset, Local};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What a path argument refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Contents(PathBuf),
    DirectoryItself(PathBuf),
    Extension { dir: PathBuf, ext: String },
    Single(PathBuf),
    Missing,
}

impl Target {
    /// Classifies `path`. Directories win over patterns, patterns over plain files.
    pub fn classify(path: &str, flags: DisplayFlags) -> Self {
        let candidate = Path::new(path);

        if candidate.is_dir() {
            return if flags.directory_only {
                Target::DirectoryItself(candidate.to_path_buf())
            } else {
                Target::Contents(candidate.to_path_buf())
            };
        }

        if let Some(target) = Self::extension_pattern(path) {
            return target;
        }

        if candidate.symlink_metadata().is_ok() {
            return Target::Single(candidate.to_path_buf());
        }

        Target::Missing
    }

    fn extension_pattern(path: &str) -> Option<Self> {
        if path.starts_with("*.") {
            return Some(Target::Extension {
                dir: PathBuf::from("."),
                ext: path[1..].to_string(),
            });
        }

        let (dir, last) = path.rsplit_once('/')?;
        if !last.starts_with("*.") {
            return None;
        }
        let dir = if dir.is_empty() { "/" } else { dir };
        Some(Target::Extension {
            dir: PathBuf::from(dir),
            ext: last[1..].to_string(),
        })
    }

    /// Grid columns for this target. Single entries always use one column.
    fn columns(&self, config: &Config) -> usize {
        match self {
            Target::Contents(_) | Target::Extension { .. } => config.layout().columns(),
            _ => 1,
        }
    }
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("No such file or directory: {}", path),
    )
}

/// Reads the records a target refers to.
pub fn collect(target: &Target, flags: DisplayFlags) -> io::Result<Vec<FileRecord>> {
    match target {
        Target::Contents(dir) => read_records(dir, flags.all_files),
        Target::DirectoryItself(path) | Target::Single(path) => Ok(vec![stat_record(path)?]),
        Target::Extension { dir, ext } => records_with_extension(dir, ext),
        Target::Missing => Ok(Vec::new()),
    }
}

/// Lists `request.path` to `out` using the current local time for long listings.
pub fn list<W: Write>(request: &ListRequest, config: &Config, out: &mut W) -> io::Result<()> {
    list_at(request, config, Local::now().fixed_offset(), out)
}

/// Same as [list] with an explicit `now`.
pub fn list_at<W: Write>(
    request: &ListRequest,
    config: &Config,
    now: DateTime<FixedOffset>,
    out: &mut W,
) -> io::Result<()> {
    let target = Target::classify(&request.path, request.flags);
    log::debug!("{} -> {:?}", request.path, target);

    if target == Target::Missing {
        return Err(not_found(&request.path));
    }

    let records = collect(&target, request.flags).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => not_found(&request.path),
        _ => e,
    })?;
    log::debug!("{} records", records.len());

    render_records(
        &records,
        target.columns(config),
        request.flags,
        config,
        now,
        out,
    )
}

/// Picks the layout engine for `flags` and writes `records`.
///
/// Long format always renders one entry per line; the grid uses `columns`.
pub fn render_records<W: Write>(
    records: &[FileRecord],
    columns: usize,
    flags: DisplayFlags,
    config: &Config,
    now: DateTime<FixedOffset>,
    out: &mut W,
) -> io::Result<()> {
    let theme = config.display().theme();

    if flags.long_format {
        let owners = config.owner().resolver();
        LongLayout::new(flags.human_readable, now, owners.as_ref(), theme)
            .with_permission_bits(config.display().permission_bits())
            .render(records, &IconTheme, out)
    } else {
        let entries = project(records, &IconTheme);
        GridLayout::new(columns, theme)
            .with_max_name_width(config.layout().max_name_width())
            .with_gutter(config.layout().gutter())
            .render(&entries, out)
    }
}
