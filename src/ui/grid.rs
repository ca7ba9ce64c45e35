//! Multi-column grid layout.
//!
//! Entries are laid out column-major: with `n` rows, cell `(row, col)` holds
//! `entries[row + col * n]`. Names longer than the maximum name width are split
//! and the remainder is shown on a continuation line below the row.
//!
//! Layout happens in two steps. [GridLayout::plan] computes every cell and the
//! column widths, [GridLayout::render] writes a plan to the output.

use crate::core::text::{display_width, split_overflow, truncate};
use crate::ui::entry::Entry;
use crate::ui::style::{RESET, Theme};

use std::io::{self, Write};

/// Code points of a name shown on the main line before it wraps.
pub const MAX_NAME_WIDTH: usize = 20;
/// Spaces between two grid columns.
pub const GUTTER: usize = 4;
/// Columns used for directory listings.
pub const DEFAULT_COLUMNS: usize = 5;

const ELLIPSIS: &str = "...";

/// One occupied grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    entry: usize,
    main: String,
    overflow: Option<String>,
}

impl GridCell {
    /// Index of the entry shown in this cell.
    #[inline]
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// Text on the main line, without icon or color codes.
    #[inline]
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Text on the continuation line, if the name wrapped.
    #[inline]
    pub fn overflow(&self) -> Option<&str> {
        self.overflow.as_deref()
    }
}

/// A grid row. Always holds exactly as many cells as the grid has columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridRow {
    cells: Vec<Option<GridCell>>,
}

impl GridRow {
    #[inline]
    pub fn cells(&self) -> &[Option<GridCell>] {
        &self.cells
    }

    /// True when any cell wrapped and the row needs a continuation line.
    pub fn has_overflow(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| cell.overflow.is_some())
    }
}

/// A fully computed grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridPlan {
    column_widths: Vec<usize>,
    rows: Vec<GridRow>,
}

impl GridPlan {
    #[inline]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    #[inline]
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Grid layout engine.
#[derive(Debug, Clone)]
pub struct GridLayout {
    num_columns: usize,
    max_name_width: usize,
    gutter: usize,
    theme: Theme,
}

impl GridLayout {
    pub fn new(num_columns: usize, theme: Theme) -> Self {
        Self {
            num_columns: num_columns.max(1),
            max_name_width: MAX_NAME_WIDTH,
            gutter: GUTTER,
            theme,
        }
    }

    /// Sets the wrap width. Values below 4 are raised to 4 so an ellipsized tail still fits.
    pub fn with_max_name_width(mut self, max_name_width: usize) -> Self {
        self.max_name_width = max_name_width.max(ELLIPSIS.len() + 1);
        self
    }

    pub fn with_gutter(mut self, gutter: usize) -> Self {
        self.gutter = gutter;
        self
    }

    /// Computes cell contents and column widths for `entries`.
    ///
    /// An empty input gives an empty plan.
    pub fn plan(&self, entries: &[Entry]) -> GridPlan {
        if entries.is_empty() {
            return GridPlan::default();
        }

        let num_columns = self.num_columns;
        let num_rows = entries.len().div_ceil(num_columns);
        let mut column_widths = vec![0usize; num_columns];
        let mut rows = Vec::with_capacity(num_rows);

        for row in 0..num_rows {
            let mut cells = Vec::with_capacity(num_columns);
            for (col, width) in column_widths.iter_mut().enumerate() {
                let idx = row + col * num_rows;
                let cell = entries.get(idx).map(|entry| self.layout_cell(idx, entry));
                if let Some(cell) = &cell {
                    *width = (*width).max(display_width(&cell.main));
                }
                cells.push(cell);
            }
            rows.push(GridRow { cells });
        }

        GridPlan {
            column_widths,
            rows,
        }
    }

    /// Splits an overlong name and places the directory slash.
    ///
    /// The slash goes on the main line when the name fits, and at the end of the
    /// continuation text when it wrapped.
    fn layout_cell(&self, idx: usize, entry: &Entry) -> GridCell {
        let name = entry.name();
        let slash = if entry.is_dir() { "/" } else { "" };

        if display_width(name) <= self.max_name_width {
            return GridCell {
                entry: idx,
                main: format!("{}{}", name, slash),
                overflow: None,
            };
        }

        let (head, tail) = split_overflow(name, self.max_name_width);
        let limit = self.max_name_width.saturating_sub(ELLIPSIS.len());

        // Only the bare tail decides; the slash shortens an already cut tail.
        let mut overflow = if display_width(tail) > limit {
            let keep = limit.saturating_sub(slash.len());
            format!("{}{}", truncate(tail, keep), ELLIPSIS)
        } else {
            tail.to_string()
        };
        overflow.push_str(slash);

        GridCell {
            entry: idx,
            main: head.to_string(),
            overflow: Some(overflow),
        }
    }

    /// Lays out `entries` and writes the grid to `out`.
    ///
    /// Every row is followed by its continuation line (if any) and one blank line.
    pub fn render<W: Write>(&self, entries: &[Entry], out: &mut W) -> io::Result<()> {
        let plan = self.plan(entries);
        self.write_plan(&plan, entries, out)
    }

    /// Writes a plan computed by [GridLayout::plan] for the same `entries`.
    fn write_plan<W: Write>(
        &self,
        plan: &GridPlan,
        entries: &[Entry],
        out: &mut W,
    ) -> io::Result<()> {
        let widths = plan.column_widths();
        let last = widths.len().saturating_sub(1);
        let mut line = String::new();

        for row in plan.rows() {
            line.clear();
            for (col, cell) in row.cells().iter().enumerate() {
                let Some(cell) = cell else { continue };
                let style = entries[cell.entry].style();
                self.theme.decorate(&mut line, style, &cell.main);
                if col < last {
                    line.push_str(&self.padding(widths[col], &cell.main));
                }
            }
            writeln!(out, "{}", line)?;

            if row.has_overflow() {
                line.clear();
                for (col, cell) in row.cells().iter().enumerate() {
                    match cell.as_ref().and_then(|c| c.overflow().map(|o| (c, o))) {
                        Some((cell, overflow)) => {
                            let style = entries[cell.entry].style();
                            line.push_str(self.theme.paint(style.color));
                            line.push_str(&" ".repeat(self.theme.prefix_width()));
                            line.push_str(overflow);
                            line.push_str(self.theme.paint(RESET));
                            if col < last {
                                line.push_str(&self.padding(widths[col], overflow));
                            }
                        }
                        None if col < last => {
                            let blank = self.theme.prefix_width() + widths[col] + self.gutter;
                            line.push_str(&" ".repeat(blank));
                        }
                        None => {}
                    }
                }
                writeln!(out, "{}", line)?;
            }

            writeln!(out)?;
        }
        Ok(())
    }

    fn padding(&self, column_width: usize, text: &str) -> String {
        " ".repeat(column_width.saturating_sub(display_width(text)) + self.gutter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::{Style, Theme};

    fn file(name: &str) -> Entry {
        Entry::new(name, Style::new("", ""), false)
    }

    fn dir(name: &str) -> Entry {
        Entry::new(name, Style::new("", ""), true)
    }

    fn render_plain(layout: &GridLayout, entries: &[Entry]) -> String {
        let mut out = Vec::new();
        layout.render(entries, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_input_emits_nothing() {
        let layout = GridLayout::new(5, Theme::plain());
        assert!(layout.plan(&[]).is_empty());
        assert_eq!(render_plain(&layout, &[]), "");
    }

    #[test]
    fn rows_have_one_cell_per_column() {
        let entries: Vec<Entry> = (0..7).map(|i| file(&format!("f{}", i))).collect();
        for cols in 1..=9 {
            let plan = GridLayout::new(cols, Theme::plain()).plan(&entries);
            assert_eq!(plan.rows().len(), entries.len().div_ceil(cols));
            for row in plan.rows() {
                assert_eq!(row.cells().len(), cols);
            }
            assert_eq!(plan.column_widths().len(), cols);
        }
    }

    #[test]
    fn cells_are_assigned_column_major() {
        let entries: Vec<Entry> = (0..7).map(|i| file(&format!("f{}", i))).collect();
        let plan = GridLayout::new(3, Theme::plain()).plan(&entries);
        let num_rows = plan.rows().len();
        assert_eq!(num_rows, 3);

        for (row, grid_row) in plan.rows().iter().enumerate() {
            for (col, cell) in grid_row.cells().iter().enumerate() {
                let idx = row + col * num_rows;
                match cell {
                    Some(cell) => {
                        assert_eq!(cell.entry(), idx);
                        assert_eq!(cell.main(), entries[idx].name());
                    }
                    None => assert!(idx >= entries.len()),
                }
            }
        }
    }

    #[test]
    fn column_widths_cap_at_max_name_width() {
        let entries = vec![
            file("short"),
            file("a_name_that_is_much_longer_than_twenty"),
            dir("docs"),
        ];
        let plan = GridLayout::new(3, Theme::plain()).plan(&entries);
        assert_eq!(plan.column_widths(), &[5, 20, 5]);
    }

    #[test]
    fn exact_width_does_not_wrap() {
        let name = "x".repeat(MAX_NAME_WIDTH);
        let plan = GridLayout::new(1, Theme::plain()).plan(&[file(&name)]);
        assert!(!plan.rows()[0].has_overflow());

        let name = "x".repeat(MAX_NAME_WIDTH + 1);
        let plan = GridLayout::new(1, Theme::plain()).plan(&[file(&name)]);
        let cell = plan.rows()[0].cells()[0].as_ref().unwrap();
        assert_eq!(cell.main(), "x".repeat(MAX_NAME_WIDTH));
        assert_eq!(cell.overflow(), Some("x"));
    }

    #[test]
    fn long_tail_is_ellipsized() {
        let name = "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGH";
        let plan = GridLayout::new(1, Theme::plain()).plan(&[file(name)]);
        let cell = plan.rows()[0].cells()[0].as_ref().unwrap();
        assert_eq!(cell.main(), "abcdefghijklmnopqrst");
        assert_eq!(cell.overflow(), Some("uvwxyz0123456789A..."));
        assert_eq!(display_width(cell.overflow().unwrap()), MAX_NAME_WIDTH);
    }

    #[test]
    fn tail_at_ellipsis_threshold_is_kept() {
        // 20 + 17 code points: the tail fits in max - 3
        let name = format!("{}{}", "a".repeat(20), "b".repeat(17));
        let plan = GridLayout::new(1, Theme::plain()).plan(&[file(&name)]);
        let cell = plan.rows()[0].cells()[0].as_ref().unwrap();
        assert_eq!(cell.overflow(), Some("b".repeat(17).as_str()));

        let name = format!("{}{}", "a".repeat(20), "b".repeat(18));
        let plan = GridLayout::new(1, Theme::plain()).plan(&[file(&name)]);
        let cell = plan.rows()[0].cells()[0].as_ref().unwrap();
        assert_eq!(cell.overflow(), Some(format!("{}...", "b".repeat(17)).as_str()));
    }

    #[test]
    fn wrapped_directory_keeps_its_slash() {
        let name = "a_directory_with_a_long_name";
        let plan = GridLayout::new(1, Theme::plain()).plan(&[dir(name)]);
        let cell = plan.rows()[0].cells()[0].as_ref().unwrap();
        assert_eq!(cell.main(), "a_directory_with_a_l");
        assert_eq!(cell.overflow(), Some("ong_name/"));

        let very_long = format!("{}{}", "d".repeat(20), "e".repeat(30));
        let plan = GridLayout::new(1, Theme::plain()).plan(&[dir(&very_long)]);
        let overflow = plan.rows()[0].cells()[0].as_ref().unwrap().overflow().unwrap();
        assert!(overflow.ends_with(".../"));
        assert_eq!(display_width(overflow), MAX_NAME_WIDTH);
    }

    #[test]
    fn directory_tail_at_ellipsis_threshold_is_kept() {
        // 20 + 17 code points: the bare tail fits in max - 3, the slash goes after it
        let name = format!("{}{}", "a".repeat(20), "b".repeat(17));
        let plan = GridLayout::new(1, Theme::plain()).plan(&[dir(&name)]);
        let cell = plan.rows()[0].cells()[0].as_ref().unwrap();
        assert_eq!(cell.overflow(), Some(format!("{}/", "b".repeat(17)).as_str()));

        let name = format!("{}{}", "a".repeat(20), "b".repeat(18));
        let plan = GridLayout::new(1, Theme::plain()).plan(&[dir(&name)]);
        let cell = plan.rows()[0].cells()[0].as_ref().unwrap();
        assert_eq!(cell.overflow(), Some(format!("{}.../", "b".repeat(16)).as_str()));
    }

    #[test]
    fn two_entries_two_columns() {
        let entries = vec![file("a.txt"), dir("subdir")];
        let layout = GridLayout::new(2, Theme::plain());
        let plan = layout.plan(&entries);
        assert_eq!(plan.rows().len(), 1);
        assert!(!plan.rows()[0].has_overflow());

        let cells = plan.rows()[0].cells();
        assert_eq!(cells[0].as_ref().unwrap().main(), "a.txt");
        assert_eq!(cells[1].as_ref().unwrap().main(), "subdir/");

        assert_eq!(render_plain(&layout, &entries), "a.txt    subdir/\n\n");
    }

    #[test]
    fn continuation_line_keeps_columns_aligned() {
        let entries = vec![
            file("one.rs"),
            file("two.rs"),
            file("twenty_five_code_point.md"),
            file("x"),
        ];
        // two rows: col 0 = [one.rs, two.rs], col 1 = [twenty_five..., x]
        let layout = GridLayout::new(2, Theme::plain());
        let out = render_plain(&layout, &entries);
        let expected = concat!(
            "one.rs    twenty_five_code_poi\n",
            "          nt.md\n",
            "\n",
            "two.rs    x\n",
            "\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn non_last_columns_are_padded_by_code_points() {
        let entries = vec![file("ñandú"), file("b"), file("日本"), file("d")];
        let layout = GridLayout::new(4, Theme::plain()).with_gutter(2);
        assert_eq!(render_plain(&layout, &entries), "ñandú  b  日本  d\n\n");
    }

    #[test]
    fn escape_codes_do_not_count_toward_padding() {
        let entries = vec![
            Entry::new("a.rs", Style::new("\x1b[33m", "\u{e7a8}"), false),
            Entry::new("b", Style::new("\x1b[34m", "\u{f07b}"), true),
        ];
        let mut out = Vec::new();
        GridLayout::new(2, Theme::default())
            .render(&entries, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let visible = strip_ansi(&text);
        assert_eq!(visible, "\u{e7a8} a.rs    \u{f07b} b/\n\n");
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}
