//! main.rs
//! Entry point for gls

use glyph_ls::app;
use glyph_ls::config::Config;
use glyph_ls::logging;
use glyph_ls::utils::cli::{CliAction, handle_args, print_help, print_version};

use std::io::{self, BufWriter, Write};

fn main() -> io::Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("[gls] Warning: logger unavailable: {}", e);
    }

    let request = match handle_args() {
        CliAction::List(request) => request,
        CliAction::Help => {
            print_help();
            return Ok(());
        }
        CliAction::Version => {
            print_version();
            return Ok(());
        }
        CliAction::Init => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("[gls] Error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
        CliAction::Invalid(arg) => {
            eprintln!("[gls] Error: Unknown argument: {}", arg);
            eprintln!("Try 'gls --help' for more information.");
            std::process::exit(2);
        }
    };

    let config = Config::load();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match app::list(&request, &config, &mut out) {
        Ok(()) => out.flush(),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            out.flush()?;
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            let _ = out.flush();
            eprintln!("[gls] Error: {}", e);
            std::process::exit(1);
        }
    }
}
