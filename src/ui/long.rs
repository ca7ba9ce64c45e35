//! Long listing layout, in the manner of `ls -l`.
//!
//! Column widths depend on the whole record set, so the records are measured
//! in a first pass and printed in a second one.

use crate::core::formatter::{
    format_mod_time, format_size, link_count, mode_permissions, synthesize_permissions,
    total_blocks,
};
use crate::core::text::{display_width, pad_left, pad_right};
use crate::core::{FileRecord, OwnerResolver};
use crate::ui::entry::Entry;
use crate::ui::style::{StyleResolver, Theme};

use chrono::{DateTime, FixedOffset, Utc};

use std::io::{self, Write};

/// One measured line of the listing.
#[derive(Debug, Clone)]
struct LongRow {
    perms: String,
    links: u32,
    owner: String,
    group: String,
    size: String,
    modified: String,
    entry: Entry,
}

/// Widest owner, group and size strings of a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldWidths {
    pub owner: usize,
    pub group: usize,
    pub size: usize,
}

/// Long format layout engine.
pub struct LongLayout<'a> {
    human_readable: bool,
    permission_bits: bool,
    now: DateTime<FixedOffset>,
    owners: &'a dyn OwnerResolver,
    theme: Theme,
}

impl<'a> LongLayout<'a> {
    /// `now` decides which modification times count as recent.
    pub fn new(
        human_readable: bool,
        now: DateTime<FixedOffset>,
        owners: &'a dyn OwnerResolver,
        theme: Theme,
    ) -> Self {
        Self {
            human_readable,
            permission_bits: false,
            now,
            owners,
            theme,
        }
    }

    /// Show the host's permission bits instead of the per-type literals.
    pub fn with_permission_bits(mut self, enabled: bool) -> Self {
        self.permission_bits = enabled;
        self
    }

    /// The `total` header value: 1K blocks, or their human-readable size.
    pub fn total_line(&self, records: &[FileRecord]) -> String {
        let blocks = total_blocks(records);
        if self.human_readable {
            format!("total {}", format_size(blocks * 1024, true))
        } else {
            format!("total {}", blocks)
        }
    }

    /// Measures owner, group and size columns over all records.
    pub fn measure(&self, records: &[FileRecord]) -> FieldWidths {
        records.iter().fold(FieldWidths::default(), |acc, record| {
            let (owner, group) = self.owners.owner_and_group(record);
            FieldWidths {
                owner: acc.owner.max(display_width(&owner)),
                group: acc.group.max(display_width(&group)),
                size: acc
                    .size
                    .max(format_size(record.size(), self.human_readable).len()),
            }
        })
    }

    /// Writes the total line followed by one line per record.
    ///
    /// An empty record set still writes `total 0`.
    pub fn render<W: Write>(
        &self,
        records: &[FileRecord],
        resolver: &dyn StyleResolver,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.total_line(records))?;

        let widths = self.measure(records);
        let rows: Vec<LongRow> = records
            .iter()
            .map(|record| self.build_row(record, resolver))
            .collect();

        let mut name = String::new();
        for row in &rows {
            name.clear();
            self.theme
                .decorate(&mut name, row.entry.style(), &row.entry.label());
            writeln!(
                out,
                "{} {:>2} {} {} {} {} {}",
                row.perms,
                row.links,
                pad_right(&row.owner, widths.owner),
                pad_right(&row.group, widths.group),
                pad_left(&row.size, widths.size),
                row.modified,
                name,
            )?;
        }
        Ok(())
    }

    fn build_row(&self, record: &FileRecord, resolver: &dyn StyleResolver) -> LongRow {
        let (owner, group) = self.owners.owner_and_group(record);
        let perms = if self.permission_bits {
            mode_permissions(record)
        } else {
            synthesize_permissions(record)
        };
        LongRow {
            perms,
            links: link_count(record),
            owner,
            group,
            size: format_size(record.size(), self.human_readable),
            modified: format_mod_time(DateTime::<Utc>::from(record.modified()), self.now),
            entry: Entry::from_record(record, resolver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedOwner;
    use crate::ui::style::IconTheme;
    use chrono::TimeZone;
    use std::time::{Duration, SystemTime};

    fn now() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
            .unwrap()
            .fixed_offset()
    }

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn render(layout: &LongLayout, records: &[FileRecord]) -> String {
        let mut out = Vec::new();
        layout.render(records, &IconTheme, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_set_prints_total_zero() {
        let owners = FixedOwner::new("user", "group");
        let layout = LongLayout::new(false, now(), &owners, Theme::plain());
        assert_eq!(render(&layout, &[]), "total 0\n");

        let human = LongLayout::new(true, now(), &owners, Theme::plain());
        assert_eq!(render(&human, &[]), "total 0B\n");
    }

    #[test]
    fn total_rounds_up_to_blocks() {
        let owners = FixedOwner::new("user", "group");
        let records = vec![
            FileRecord::new("a", 1000, at(0), 0, 0),
            FileRecord::new("b", 500, at(0), 0, 0),
        ];
        let layout = LongLayout::new(false, now(), &owners, Theme::plain());
        assert_eq!(layout.total_line(&records), "total 2");

        let human = LongLayout::new(true, now(), &owners, Theme::plain());
        assert_eq!(human.total_line(&records), "total 2.0K");
    }

    #[test]
    fn fields_are_aligned_over_the_whole_set() {
        let owners = FixedOwner::new("user", "group");
        // 2024-06-01 10:30:00 UTC
        let recent = at(1_717_237_800);
        let records = vec![
            FileRecord::new("a.txt", 500, recent, 0, 0),
            FileRecord::new("build.exe", 123_456, recent, 0, 0),
            FileRecord::new("src", 4096, recent, FileRecord::IS_DIR, 0),
        ];
        let layout = LongLayout::new(false, now(), &owners, Theme::plain());
        let expected = concat!(
            "total 126\n",
            "-rw-r--r--  1 user group    500 Jun  1 10:30 a.txt\n",
            "-rwxr-xr--  1 user group 123456 Jun  1 10:30 build.exe\n",
            "drwxr-xr-x  2 user group   4096 Jun  1 10:30 src/\n",
        );
        assert_eq!(render(&layout, &records), expected);
    }

    #[test]
    fn human_sizes_and_old_dates() {
        let owners = FixedOwner::new("alice", "staff");
        // 2023-01-10 08:00:00 UTC
        let old = at(1_673_337_600);
        let records = vec![
            FileRecord::new("big.iso", 3 * 1024 * 1024 * 1024, old, 0, 0),
            FileRecord::new("tiny", 12, old, 0, 0),
        ];
        let layout = LongLayout::new(true, now(), &owners, Theme::plain());
        let out = render(&layout, &records);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "total 3.0G");
        assert_eq!(lines[1], "-rw-r--r--  1 alice staff 3.0G Jan 10  2023 big.iso");
        assert_eq!(lines[2], "-rw-r--r--  1 alice staff  12B Jan 10  2023 tiny");
    }

    #[test]
    fn owner_widths_follow_the_longest_value() {
        struct PerFile;
        impl OwnerResolver for PerFile {
            fn owner_and_group(&self, record: &FileRecord) -> (String, String) {
                if record.name() == "root_file" {
                    ("root".into(), "wheel".into())
                } else {
                    ("maintainer".into(), "dev".into())
                }
            }
        }

        let records = vec![
            FileRecord::new("root_file", 1, at(1_717_237_800), 0, 0),
            FileRecord::new("other", 22, at(1_717_237_800), 0, 0),
        ];
        let layout = LongLayout::new(false, now(), &PerFile, Theme::plain());
        assert_eq!(
            layout.measure(&records),
            FieldWidths {
                owner: 10,
                group: 5,
                size: 2
            }
        );
        let out = render(&layout, &records);
        assert!(out.contains(" root       wheel  1 "));
        assert!(out.contains(" maintainer dev   22 "));
    }

    // Symlinks are listed with an `l` type character rather than as plain files.
    #[test]
    fn symlink_line_uses_link_type() {
        let owners = FixedOwner::new("u", "g");
        let records = vec![FileRecord::new(
            "latest",
            7,
            at(1_717_237_800),
            FileRecord::IS_SYMLINK,
            0,
        )];
        let layout = LongLayout::new(false, now(), &owners, Theme::plain());
        let out = render(&layout, &records);
        assert!(out.lines().nth(1).unwrap().starts_with("lrwxrwxrwx  1 u g 7 "));
    }

    #[test]
    fn permission_bits_switch() {
        let owners = FixedOwner::new("u", "g");
        let records = vec![FileRecord::new("run.sh", 1, at(1_717_237_800), 0, 0o100750)];
        let layout =
            LongLayout::new(false, now(), &owners, Theme::plain()).with_permission_bits(true);
        let out = render(&layout, &records);
        assert!(out.lines().nth(1).unwrap().starts_with("-rwxr-x---"));
    }

    #[test]
    fn colored_name_keeps_fields_plain() {
        let owners = FixedOwner::new("u", "g");
        let records = vec![FileRecord::new("main.rs", 1, at(1_717_237_800), 0, 0)];
        let layout = LongLayout::new(false, now(), &owners, Theme::default());
        let out = render(&layout, &records);
        let line = out.lines().nth(1).unwrap();
        assert!(line.starts_with("-rw-r--r--  1 u g 1 Jun  1 10:30 \x1b[33m\u{e7a8} \x1b[37mmain.rs"));
        assert!(line.ends_with("\x1b[0m"));
    }
}
