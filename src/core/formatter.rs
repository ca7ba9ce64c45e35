//! Field formatting for file records.
//!
//! Sizes, modification times, permission strings and link counts as they appear
//! in listings. Every function here is pure; "now" is always passed in.

use crate::core::fm::{FileRecord, has_executable_suffix};

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

pub const KB: u64 = 1024;
pub const MB: u64 = 1024 * KB;
pub const GB: u64 = 1024 * MB;
pub const TB: u64 = 1024 * GB;

/// Entries modified longer ago than this show a year instead of a clock time.
pub const RECENT_DAYS: i64 = 180;

/// Formats a byte count.
///
/// Without `human_readable` this is the plain decimal number. Otherwise the
/// largest 1024-based unit that fits is used with one decimal place
/// (`"1.5K"`, `"3.0G"`), and sizes below one KiB are shown as `"512B"`.
pub fn format_size(size: u64, human_readable: bool) -> String {
    if !human_readable {
        return size.to_string();
    }

    let scaled = |unit: u64| size as f64 / unit as f64;
    match size {
        s if s >= TB => format!("{:.1}T", scaled(TB)),
        s if s >= GB => format!("{:.1}G", scaled(GB)),
        s if s >= MB => format!("{:.1}M", scaled(MB)),
        s if s >= KB => format!("{:.1}K", scaled(KB)),
        s => format!("{}B", s),
    }
}

/// Formats a modification time relative to `now`.
///
/// Recent entries show `"Jan  2 15:04"`, entries older than [RECENT_DAYS] show
/// `"Jan  2  2006"`. The time is rendered in the offset of `now`.
pub fn format_mod_time(modified: DateTime<Utc>, now: DateTime<FixedOffset>) -> String {
    let local = modified.with_timezone(&now.timezone());
    if now.signed_duration_since(local) > TimeDelta::days(RECENT_DAYS) {
        local.format("%b %e  %Y").to_string()
    } else {
        local.format("%b %e %H:%M").to_string()
    }
}

/// Synthesizes a unix-like permission string from the record's type.
///
/// The rwx part is a fixed literal per category rather than the real mode bits:
/// - directories: `drwxr-xr-x`
/// - symlinks: `lrwxrwxrwx`
/// - names with an executable suffix: `-rwxr-xr--`
/// - everything else: `-rw-r--r--`
pub fn synthesize_permissions(record: &FileRecord) -> String {
    let (kind, bits) = if record.is_symlink() {
        ('l', "rwxrwxrwx")
    } else if record.is_dir() {
        ('d', "rwxr-xr-x")
    } else if has_executable_suffix(record.name()) {
        ('-', "rwxr-xr--")
    } else {
        ('-', "rw-r--r--")
    };
    let mut out = String::with_capacity(10);
    out.push(kind);
    out.push_str(bits);
    out
}

/// Formats the real permission bits of the record in a unix-like format.
///
/// Falls back to [synthesize_permissions] when the host reported no mode bits.
pub fn mode_permissions(record: &FileRecord) -> String {
    let mode = record.mode();
    if mode == 0 {
        return synthesize_permissions(record);
    }

    let first = if record.is_symlink() {
        'l'
    } else if record.is_dir() {
        'd'
    } else {
        '-'
    };
    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Link count shown in long listings: 2 for directories, 1 for anything else.
#[inline]
pub fn link_count(record: &FileRecord) -> u32 {
    if record.is_dir() { 2 } else { 1 }
}

/// Sum of all sizes in 1K blocks, rounded up.
pub fn total_blocks(records: &[FileRecord]) -> u64 {
    let total: u64 = records.iter().map(FileRecord::size).sum();
    total.div_ceil(KB)
}
