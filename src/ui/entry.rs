//! Per-pass projection of file records into what the layout engines draw.

use crate::core::FileRecord;
use crate::ui::style::{Style, StyleResolver};

use std::borrow::Cow;

/// A record as the layout engines see it: name, resolved style and whether it is a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    style: Style,
    is_dir: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, style: Style, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            style,
            is_dir,
        }
    }

    pub fn from_record(record: &FileRecord, resolver: &dyn StyleResolver) -> Self {
        Self::new(record.name(), resolver.resolve(record), record.is_dir())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// The name with a trailing `/` for directories.
    pub fn label(&self) -> Cow<'_, str> {
        if self.is_dir {
            Cow::Owned(format!("{}/", self.name))
        } else {
            Cow::Borrowed(&self.name)
        }
    }
}

/// Projects every record once, keeping input order.
pub fn project(records: &[FileRecord], resolver: &dyn StyleResolver) -> Vec<Entry> {
    records
        .iter()
        .map(|r| Entry::from_record(r, resolver))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::IconTheme;
    use std::time::SystemTime;

    #[test]
    fn label_marks_directories() {
        let records = vec![
            FileRecord::new("a.txt", 500, SystemTime::UNIX_EPOCH, 0, 0),
            FileRecord::new("subdir", 0, SystemTime::UNIX_EPOCH, FileRecord::IS_DIR, 0),
        ];
        let entries = project(&records, &IconTheme);
        assert_eq!(entries[0].label(), "a.txt");
        assert_eq!(entries[1].label(), "subdir/");
        assert_eq!(entries[1].name(), "subdir");
    }
}
