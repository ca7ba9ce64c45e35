//! Command-line argument parsing and help for gls.
//!
//! Flags can be given separately (`-l -a`) or combined (`-la`, `-lh`).
//! The first non-flag argument is the path to list; without one the current
//! directory is listed.

/// Display switches taken from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlags {
    /// `-l`: long listing, one entry per line.
    pub long_format: bool,
    /// `-a`: include dotfiles.
    pub all_files: bool,
    /// `-d`, `--directory`: list a directory itself, not its contents.
    pub directory_only: bool,
    /// `-h`, `--human-readable`: sizes as `1.5K`, `3.0G`, ...
    pub human_readable: bool,
}

/// What to list and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub path: String,
    pub flags: DisplayFlags,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            flags: DisplayFlags::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List(ListRequest),
    Init,
    Help,
    Version,
    Invalid(String),
}

/// Reads the process arguments.
pub fn handle_args() -> CliAction {
    parse_args(std::env::args().skip(1))
}

/// Parses arguments (without the program name) into an action.
pub fn parse_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let mut request = ListRequest::default();
    let mut path: Option<String> = None;
    let mut init = false;

    for arg in args {
        match arg.as_str() {
            "--help" => return CliAction::Help,
            "-v" | "--version" => return CliAction::Version,
            "--init" => init = true,
            "-l" => request.flags.long_format = true,
            "-a" => request.flags.all_files = true,
            "-d" | "--directory" => request.flags.directory_only = true,
            "-h" | "--human-readable" => request.flags.human_readable = true,
            combined if combined.starts_with('-') && !combined.starts_with("--") && combined.len() > 2 => {
                for c in combined[1..].chars() {
                    match c {
                        'l' => request.flags.long_format = true,
                        'a' => request.flags.all_files = true,
                        'd' => request.flags.directory_only = true,
                        'h' => request.flags.human_readable = true,
                        'v' => return CliAction::Version,
                        other => return CliAction::Invalid(format!("-{}", other)),
                    }
                }
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return CliAction::Invalid(flag.to_string());
            }
            other => {
                if path.is_some() {
                    return CliAction::Invalid(format!(
                        "{} (gls accepts only one path at a time)",
                        other
                    ));
                }
                path = Some(other.to_string());
            }
        }
    }

    if init {
        return CliAction::Init;
    }
    if let Some(path) = path {
        request.path = path;
    }
    CliAction::List(request)
}

pub fn print_version() {
    println!("gls {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"gls - an ls-style lister with icons, colors and columns

USAGE:
  gls [OPTIONS] [PATH]

PATH:
  Directory or file to list (defaults to the current directory)

OPTIONS:
  -l                      Long listing format
  -a                      Include entries starting with '.'
  -d, --directory         List the directory itself, not its contents
  -h, --human-readable    Print sizes like 1.5K, 23.0M, 2.0G
      --init              Generate the default configuration file
      --help              Print help information
  -v, --version           Display the current installed version of gls

  Short flags can be combined, e.g. -la or -lh.

PATTERNS:
  *.extension             List files with that extension in the current directory
  path/*.extension        List files with that extension in path
  path/filename           Show a single file

ENVIRONMENT:
  GLS_CONFIG              Override the default config path
  GLS_LOG                 Log level on stderr (error, warn, info, debug, trace)
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_lists_current_dir() {
        assert_eq!(parse(&[]), CliAction::List(ListRequest::default()));
    }

    #[test]
    fn separate_and_combined_flags() {
        let CliAction::List(req) = parse(&["-l", "-a", "src"]) else {
            panic!("expected a listing");
        };
        assert!(req.flags.long_format && req.flags.all_files);
        assert!(!req.flags.human_readable);
        assert_eq!(req.path, "src");

        let CliAction::List(req) = parse(&["-lah"]) else {
            panic!("expected a listing");
        };
        assert_eq!(
            req.flags,
            DisplayFlags {
                long_format: true,
                all_files: true,
                directory_only: false,
                human_readable: true,
            }
        );
        assert_eq!(req.path, ".");
    }

    #[test]
    fn long_options() {
        let CliAction::List(req) = parse(&["--directory", "--human-readable", "/tmp"]) else {
            panic!("expected a listing");
        };
        assert!(req.flags.directory_only && req.flags.human_readable);
        assert_eq!(req.path, "/tmp");
    }

    #[test]
    fn help_version_and_init() {
        assert_eq!(parse(&["--help"]), CliAction::Help);
        assert_eq!(parse(&["-v"]), CliAction::Version);
        assert_eq!(parse(&["-lv"]), CliAction::Version);
        assert_eq!(parse(&["--init"]), CliAction::Init);
    }

    #[test]
    fn unknown_flags_and_extra_paths_are_rejected() {
        assert_eq!(parse(&["-x"]), CliAction::Invalid("-x".into()));
        assert_eq!(parse(&["-lq"]), CliAction::Invalid("-q".into()));
        assert!(matches!(parse(&["--nope"]), CliAction::Invalid(_)));
        assert!(matches!(parse(&["a", "b"]), CliAction::Invalid(_)));
    }

    #[test]
    fn patterns_are_paths() {
        let CliAction::List(req) = parse(&["*.txt"]) else {
            panic!("expected a listing");
        };
        assert_eq!(req.path, "*.txt");
    }
}
