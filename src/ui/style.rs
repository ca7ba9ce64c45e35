//! Colors and icons for listed entries.
//!
//! The [StyleResolver] trait maps a [FileRecord] to a [Style] (ANSI color code + icon).
//! [IconTheme] is the default resolver backed by the static tables in [crate::ui::icons].
//!
//! [Theme] decides whether color codes and icons are emitted at all. Color codes are
//! opaque to the layout engines and never counted in any width.

use crate::core::FileRecord;
use crate::ui::icons::{
    DEFAULT_FILE, EXECUTABLE, EXT_ICON_MAP, FOLDER, FRAMEWORK_ICON_MAP, SPECIAL_DIR_ICON_MAP,
    SPECIAL_FILE_ICON_MAP, SYMLINK_DIR, SYMLINK_FILE,
};

use phf::phf_map;

/// Builds an SGR escape sequence from one or more parameter codes.
macro_rules! sgr {
    ($($code:literal),+) => {
        concat!($("\x1b[", $code, "m"),+)
    };
}

pub const RESET: &str = sgr!("0");
pub const DIM: &str = sgr!("2");
pub const RED: &str = sgr!("31");
pub const GREEN: &str = sgr!("32");
pub const YELLOW: &str = sgr!("33");
pub const BLUE: &str = sgr!("34");
pub const MAGENTA: &str = sgr!("35");
pub const CYAN: &str = sgr!("36");
pub const WHITE: &str = sgr!("37");
pub const BRIGHT_RED: &str = sgr!("91");
pub const BRIGHT_GREEN: &str = sgr!("92");
pub const BRIGHT_YELLOW: &str = sgr!("93");
pub const BRIGHT_BLUE: &str = sgr!("94");
pub const BRIGHT_MAGENTA: &str = sgr!("95");
pub const BRIGHT_CYAN: &str = sgr!("96");
pub const BRIGHT_WHITE: &str = sgr!("97");
pub const BOLD_YELLOW: &str = sgr!("33", "1");
pub const BOLD_BRIGHT_GREEN: &str = sgr!("92", "1");

/// Extension to icon color. Only consulted for extensions that have an icon.
static EXT_COLOR_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "java" => CYAN, "go" => CYAN, "jsx" => CYAN, "ex" => CYAN, "exs" => CYAN, "f90" => CYAN,
    "py" => BRIGHT_BLUE, "asm" => BRIGHT_BLUE, "dart" => BRIGHT_BLUE, "ps1" => BRIGHT_BLUE,
    "rs" => YELLOW, "hs" => YELLOW, "ml" => YELLOW, "vue" => YELLOW,
    "js" => BRIGHT_YELLOW, "m" => BRIGHT_YELLOW, "mat" => BRIGHT_YELLOW, "cbl" => BRIGHT_YELLOW,
    "ts" => BLUE, "tsx" => BLUE, "lua" => BLUE,
    "kt" => RED, "jil" => RED,
    "c" => BRIGHT_GREEN, "cpp" => BRIGHT_GREEN, "cs" => BRIGHT_GREEN,
    "rb" => BRIGHT_RED,
    "php" => BRIGHT_MAGENTA, "scala" => BRIGHT_MAGENTA, "ads" => BRIGHT_MAGENTA,
    "pl" => BRIGHT_CYAN, "sql" => BRIGHT_CYAN,
    "r" => GREEN, "sh" => GREEN, "bash" => GREEN, "zsh" => GREEN, "vim" => GREEN,
    "d" => MAGENTA,
    "swift" => BRIGHT_WHITE, "o" => BRIGHT_WHITE, "coffee" => BRIGHT_WHITE,
    // Web
    "html" => BOLD_YELLOW,
    "css" => BRIGHT_MAGENTA,
    // Data formats
    "json" => BRIGHT_YELLOW, "xml" => BRIGHT_YELLOW, "yaml" => BRIGHT_YELLOW,
    "yml" => BRIGHT_YELLOW, "toml" => BRIGHT_YELLOW, "csv" => BRIGHT_YELLOW,
    // Documents
    "txt" => WHITE, "md" => WHITE,
    "pdf" => BRIGHT_RED, "doc" => BRIGHT_RED, "docx" => BRIGHT_RED, "odt" => BRIGHT_RED,
    "xls" => BRIGHT_GREEN, "xlsx" => BRIGHT_GREEN,
    "ppt" => BRIGHT_YELLOW, "pptx" => BRIGHT_YELLOW,
    "log" => CYAN,
    "ipynb" => BOLD_YELLOW,
    // Media
    "jpg" => BRIGHT_CYAN, "jpeg" => BRIGHT_CYAN, "png" => BRIGHT_CYAN,
    "gif" => BRIGHT_CYAN, "svg" => BRIGHT_CYAN,
    "epub" => MAGENTA, "mobi" => MAGENTA,
    "mp4" => BRIGHT_MAGENTA, "avi" => BRIGHT_MAGENTA, "mkv" => BRIGHT_MAGENTA,
    "mov" => BRIGHT_MAGENTA, "flv" => BRIGHT_MAGENTA,
    // Archives
    "zip" => RED, "tar" => RED, "gz" => RED, "rar" => RED, "7z" => RED,
    // Config
    "conf" => GREEN, "ini" => GREEN,
};

/// Special filename to icon color.
static SPECIAL_FILE_COLOR_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "go.mod" => CYAN,
    "go.sum" => CYAN,
    "package.json" => BOLD_BRIGHT_GREEN,
    ".gitignore" => GREEN,
    ".gitattributes" => GREEN,
    ".bashrc" => BRIGHT_WHITE,
    ".zshrc" => BRIGHT_WHITE,
    ".vimrc" => GREEN,
    "Dockerfile" => GREEN,
    "Makefile" => GREEN,
    "CMakeLists.txt" => GREEN,
};

/// Display style of one entry: the color code of the icon and the icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: &'static str,
    pub icon: &'static str,
}

impl Style {
    pub const fn new(color: &'static str, icon: &'static str) -> Self {
        Self { color, icon }
    }
}

/// Maps a file record to its display color and icon.
pub trait StyleResolver {
    fn resolve(&self, record: &FileRecord) -> Style;
}

/// Default resolver using the Nerd Font tables.
///
/// Resolution order: symlink, directory, executable, framework config file,
/// special filename, extension, fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconTheme;

impl StyleResolver for IconTheme {
    fn resolve(&self, record: &FileRecord) -> Style {
        let name = record.name();

        if record.is_symlink() {
            let icon = if record.is_dir() {
                SYMLINK_DIR
            } else {
                SYMLINK_FILE
            };
            return Style::new(CYAN, icon);
        }

        if record.is_dir() {
            let icon = SPECIAL_DIR_ICON_MAP.get(name).copied().unwrap_or(FOLDER);
            return Style::new(BLUE, icon);
        }

        if record.is_executable() {
            return Style::new(BRIGHT_GREEN, EXECUTABLE);
        }

        if let Some(icon) = FRAMEWORK_ICON_MAP.get(name) {
            return Style::new(YELLOW, icon);
        }

        if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name) {
            let color = SPECIAL_FILE_COLOR_MAP.get(name).copied().unwrap_or(DIM);
            return Style::new(color, icon);
        }

        let ext = record.extension();
        if let Some(icon) = EXT_ICON_MAP.get(ext.as_str()) {
            let color = EXT_COLOR_MAP.get(ext.as_str()).copied().unwrap_or(DIM);
            return Style::new(color, icon);
        }

        Style::new(DIM, DEFAULT_FILE)
    }
}

/// Output switches shared by both layout engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colors: bool,
    icons: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: true,
            icons: true,
        }
    }
}

impl Theme {
    pub fn new(colors: bool, icons: bool) -> Self {
        Self { colors, icons }
    }

    /// Plain text output, no escape codes and no icons.
    pub fn plain() -> Self {
        Self::new(false, false)
    }

    /// Returns `code` when colors are enabled, otherwise an empty string.
    #[inline]
    pub fn paint<'a>(&self, code: &'a str) -> &'a str {
        if self.colors { code } else { "" }
    }

    /// Width of the `"<icon> "` prefix written before every name.
    #[inline]
    pub fn prefix_width(&self) -> usize {
        if self.icons { 2 } else { 0 }
    }

    /// Writes `color + icon + " " + white + text + reset` into `buf`.
    pub fn decorate(&self, buf: &mut String, style: Style, text: &str) {
        buf.push_str(self.paint(style.color));
        if self.icons {
            buf.push_str(style.icon);
            buf.push(' ');
        }
        buf.push_str(self.paint(WHITE));
        buf.push_str(text);
        buf.push_str(self.paint(RESET));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn rec(name: &str, flags: u8) -> FileRecord {
        FileRecord::new(name, 0, SystemTime::UNIX_EPOCH, flags, 0)
    }

    #[test]
    fn resolves_by_type_then_name_then_extension() {
        let theme = IconTheme;
        assert_eq!(theme.resolve(&rec("src", FileRecord::IS_DIR)), Style::new(BLUE, FOLDER));
        assert_eq!(
            theme.resolve(&rec(".git", FileRecord::IS_DIR)).icon,
            crate::ui::icons::GIT_FOLDER
        );
        assert_eq!(
            theme.resolve(&rec("run", FileRecord::IS_EXECUTABLE)),
            Style::new(BRIGHT_GREEN, EXECUTABLE)
        );
        assert_eq!(theme.resolve(&rec("vite.config.ts", 0)).color, YELLOW);
        assert_eq!(theme.resolve(&rec("go.mod", 0)).color, CYAN);
        assert_eq!(theme.resolve(&rec("main.RS", 0)), Style::new(YELLOW, "\u{e7a8}"));
        assert_eq!(theme.resolve(&rec("mystery.qqq", 0)), Style::new(DIM, DEFAULT_FILE));
    }

    #[test]
    fn bold_colors_combine_codes() {
        assert_eq!(BOLD_YELLOW, "\x1b[33m\x1b[1m");
        assert_eq!(IconTheme.resolve(&rec("index.html", 0)).color, BOLD_YELLOW);
        assert_eq!(IconTheme.resolve(&rec("notes.ipynb", 0)).color, BOLD_YELLOW);
        assert_eq!(
            IconTheme.resolve(&rec("package.json", 0)).color,
            BOLD_BRIGHT_GREEN
        );
    }

    #[test]
    fn symlinks_resolve_before_directories() {
        let style = IconTheme.resolve(&rec("docs", FileRecord::IS_SYMLINK | FileRecord::IS_DIR));
        assert_eq!(style, Style::new(CYAN, SYMLINK_DIR));
    }

    #[test]
    fn decorate_respects_switches() {
        let style = Style::new(BLUE, FOLDER);

        let mut plain = String::new();
        Theme::plain().decorate(&mut plain, style, "src/");
        assert_eq!(plain, "src/");

        let mut full = String::new();
        Theme::default().decorate(&mut full, style, "src/");
        assert_eq!(full, format!("{BLUE}{FOLDER} {WHITE}src/{RESET}"));
    }
}
