//! Module for mapping file types and names to Nerd Font icons.
//! This module provides the static lookup tables used by the style resolver,
//! keyed by file extension, special filename and special directory name.
//!
//! Keys are matched exactly; extensions are looked up lowercased and without the dot.

use phf::phf_map;

pub const FOLDER: &str = "\u{f07b}";
pub const GIT_FOLDER: &str = "\u{f1d3}";
pub const SYMLINK_FILE: &str = "\u{f481}";
pub const SYMLINK_DIR: &str = "\u{f482}";
pub const EXECUTABLE: &str = "\u{eae8}";
pub const DEFAULT_FILE: &str = "\u{f15b}";

/// File extension to icon mapping
/// For example, "rs" maps to the Rust icon.
pub(crate) static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Programming languages
    "asm" => "\u{e6ab}",
    "go" => "\u{e627}",
    "py" => "\u{e73c}",
    "js" => "\u{e781}",
    "ts" => "\u{e628}",
    "jsx" => "\u{ed46}",
    "tsx" => "\u{ed46}",
    "html" => "\u{e736}",
    "css" => "\u{e749}",
    "json" => "\u{e60b}",
    "md" => "\u{e73e}",
    "java" => "\u{e738}",
    "c" => "\u{e61e}",
    "o" => "\u{f013}",
    "cpp" => "\u{e61d}",
    "cs" => "\u{f81a}",
    "rb" => "\u{e739}",
    "php" => "\u{e73d}",
    "rs" => "\u{e7a8}",
    "swift" => "\u{e755}",
    "scala" => "\u{e737}",
    "dart" => "\u{e798}",
    "kt" => "\u{e634}",
    "ex" => "\u{e62d}",
    "exs" => "\u{e62d}",
    "hs" => "\u{e777}",
    "sh" => "\u{e795}",
    "pl" => "\u{e769}",
    "r" => "\u{e76c}",
    "coffee" => "\u{e7b1}",
    "d" => "\u{e7af}",
    "m" => "\u{e82a}",
    "mat" => "\u{e82a}",
    "ps1" => "\u{e7d8}",
    "jil" => "\u{e80d}",
    "lua" => "\u{e826}",
    "ml" => "\u{e62b}",
    "f90" => "\u{e7de}",
    "vim" => "\u{e62b}",
    "bash" => "\u{e760}",
    "zsh" => "\u{e760}",
    "ads" => "\u{e6b5}",
    "cbl" => "\u{e6b5}",
    "db" => "\u{f01b}",
    "sql" => "\u{f1c0}",
    "fs" => "\u{e7a7}",
    "fsi" => "\u{e7a7}",
    "rkt" => "\u{e7d4}",
    "clj" => "\u{e7d0}",
    "vb" => "\u{fbe8}",
    "vba" => "\u{fbe8}",
    "vue" => "\u{e6a0}",
    // Markup and config
    "xml" => "\u{e62c}",
    "yml" => "\u{e60c}",
    "yaml" => "\u{e60c}",
    "csv" => "\u{e60d}",
    "toml" => "\u{e60e}",
    "ini" => "\u{e60e}",
    "conf" => "\u{e615}",
    "tex" => "\u{e69b}",
    // Documents
    "txt" => "\u{f15c}",
    "pdf" => "\u{f1c1}",
    "doc" => "\u{f1c2}",
    "docx" => "\u{f1c2}",
    "xls" => "\u{f1c3}",
    "xlsx" => "\u{f1c3}",
    "ppt" => "\u{f1c4}",
    "pptx" => "\u{f1c4}",
    "odt" => "\u{f15c}",
    "ods" => "\u{f1c3}",
    "odp" => "\u{f1c4}",
    "log" => "\u{f4ed}",
    "ipynb" => "\u{e80f}",
    // Images
    "jpg" => "\u{f1c5}",
    "jpeg" => "\u{f1c5}",
    "png" => "\u{f1c5}",
    "gif" => "\u{f1c5}",
    "svg" => "\u{f1c5}",
    // Archives
    "zip" => "\u{f1c6}",
    "tar" => "\u{f1c6}",
    "gz" => "\u{f1c6}",
    "rar" => "\u{f1c6}",
    "7z" => "\u{f1c6}",
    // Video
    "mp4" => "\u{f03d}",
    "avi" => "\u{f03d}",
    "mkv" => "\u{f03d}",
    "mov" => "\u{f03d}",
    "flv" => "\u{f03d}",
    // eBooks
    "epub" => "\u{f02d}",
    "mobi" => "\u{f02d}",
};

/// Framework config files. These are all shown in the framework accent color.
pub(crate) static FRAMEWORK_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "tailwind.config.js" => "\u{e8ba}",
    "tailwind.config.ts" => "\u{e8ba}",
    "vue.config.js" => "\u{ed4a}",
    "vite.config.js" => "\u{e8d7}",
    "vite.config.ts" => "\u{e8d7}",
    "next.config.js" => "\u{e83e}",
    "next.config.ts" => "\u{e83e}",
    ".eslintrc.js" => "\u{e74b}",
    ".eslintrc.json" => "\u{e74b}",
    ".eslintrc.yml" => "\u{e74b}",
    ".eslintrc.yaml" => "\u{e74b}",
};

/// Special file names
/// Maps a whole filename to its icon, taking precedence over the extension.
pub(crate) static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "go.mod" => "\u{e65e}",
    "go.sum" => "\u{e65e}",
    "package.json" => "\u{f487}",
    ".gitignore" => "\u{e65d}",
    ".gitattributes" => "\u{e65d}",
    ".bashrc" => "\u{e760}",
    ".zshrc" => "\u{e760}",
    ".vimrc" => "\u{e62b}",
    "Dockerfile" => "\u{e7b0}",
    "Makefile" => "\u{e70e}",
    "CMakeLists.txt" => "\u{e794}",
};

/// Special directory names
/// For example, ".git" maps to the git folder icon.
pub(crate) static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    ".git" => GIT_FOLDER,
    ".github" => "\u{e5fd}",
    ".config" => "\u{e5fc}",
    "node_modules" => "\u{e5fa}",
};
