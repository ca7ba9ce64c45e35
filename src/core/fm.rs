//! File system enumeration for gls.
//!
//! Provides the [FileRecord] struct consumed read-only by the layout engines,
//! and the functions that build records from directory listings and single paths.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Immutable view of a single file system entry.
///
/// Holds the name, size, modification time, type flags and the raw permission mode.
/// Created by [read_records], [records_with_extension] or [stat_record].
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    name: String,
    size: u64,
    modified: SystemTime,
    flags: u8,
    mode: u32,
}

impl FileRecord {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_SYMLINK: u8 = 1 << 1;
    pub const IS_EXECUTABLE: u8 = 1 << 2;
    pub const IS_HIDDEN: u8 = 1 << 3;

    #[cfg(unix)]
    const EXEC_FLAG: u32 = 0o111;

    pub fn new(
        name: impl Into<String>,
        size: u64,
        modified: SystemTime,
        flags: u8,
        mode: u32,
    ) -> Self {
        let name = name.into();
        let flags = if name.starts_with('.') {
            flags | Self::IS_HIDDEN
        } else {
            flags
        };
        FileRecord {
            name,
            size,
            modified,
            flags,
            mode,
        }
    }

    /// Builds a record from `symlink_metadata` of the entry.
    ///
    /// Symlinks keep their own size and time; only the directory bit of the target
    /// is followed so that linked directories still list as directories.
    pub fn from_metadata(name: impl Into<String>, meta: &Metadata, path: &Path) -> Self {
        let mut flags = 0u8;
        let file_type = meta.file_type();
        if file_type.is_dir() {
            flags |= Self::IS_DIR;
        }
        if file_type.is_symlink() {
            flags |= Self::IS_SYMLINK;
            if fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false) {
                flags |= Self::IS_DIR;
            }
        }

        #[cfg(unix)]
        let mode = {
            use std::os::unix::fs::PermissionsExt;
            let mode = meta.permissions().mode();
            if !file_type.is_dir() && mode & Self::EXEC_FLAG != 0 {
                flags |= Self::IS_EXECUTABLE;
            }
            mode
        };
        #[cfg(not(unix))]
        let mode = 0;

        let name = name.into();
        #[cfg(windows)]
        {
            if has_executable_suffix(&name) {
                flags |= Self::IS_EXECUTABLE;
            }
        }

        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        Self::new(name, meta.len(), modified, flags, mode)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Raw permission bits, `0` on hosts that do not report them.
    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.flags & Self::IS_EXECUTABLE != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    /// Lowercased extension without the dot, e.g. `"rs"`.
    /// Empty for names without one and for dotfiles like `.bashrc`.
    pub fn extension(&self) -> String {
        match self.name.rfind('.') {
            Some(idx) if idx > 0 => self.name[idx + 1..].to_lowercase(),
            _ => String::new(),
        }
    }
}

/// True for names ending in a suffix that Windows treats as runnable.
pub fn has_executable_suffix(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "exe" | "com" | "bat" | "cmd" | "ps1"
    )
}

/// Sorts records by name, the order directory listings are shown in.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by(|a, b| a.name().cmp(b.name()));
}

/// Reads the contents of `dir` into records, sorted by name.
///
/// Dotfiles are skipped unless `show_hidden` is set. Entries whose metadata
/// cannot be read are skipped and logged.
pub fn read_records(dir: &Path, show_hidden: bool) -> io::Result<Vec<FileRecord>> {
    collect_records(dir, |record| show_hidden || !record.is_hidden())
}

/// Reads the entries of `dir` whose name ends with `ext` (e.g. `".txt"`).
///
/// Dotfiles are not filtered here: a pattern that names them lists them.
pub fn records_with_extension(dir: &Path, ext: &str) -> io::Result<Vec<FileRecord>> {
    collect_records(dir, |record| record.name().ends_with(ext))
}

/// Builds the record for a single path, used for plain files and `-d`.
pub fn stat_record(path: &Path) -> io::Result<FileRecord> {
    let meta = fs::symlink_metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FileRecord::from_metadata(name, &meta, path))
}

fn collect_records<F>(dir: &Path, keep: F) -> io::Result<Vec<FileRecord>>
where
    F: Fn(&FileRecord) -> bool,
{
    let mut records = Vec::with_capacity(64);

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        let record = match fs::symlink_metadata(&path) {
            Ok(meta) => FileRecord::from_metadata(name, &meta, &path),
            Err(e) => {
                log::warn!("cannot stat {}: {}", path.display(), e);
                continue;
            }
        };
        if keep(&record) {
            records.push(record);
        }
    }

    sort_records(&mut records);
    log::debug!("read {} records from {}", records.len(), dir.display());
    Ok(records)
}
