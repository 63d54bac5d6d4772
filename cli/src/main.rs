//! termfolio -- the command-line entry point.
//!
//! # Usage
//!
//! ```text
//! termfolio
//! termfolio --content portfolio.yaml
//! termfolio --theme light
//! termfolio --cv ~/docs/cv.pdf --log-file /tmp/termfolio.log
//! ```

mod args;

use std::path::Path;
use std::process;

use termfolio_core::content::Portfolio;
use termfolio_tui::theme::Theme;
use termfolio_tui::tui::Tui;
use tracing_subscriber::EnvFilter;


fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = argv[1..].iter().map(|s| s.as_str()).collect();

    let cli = match args::parse_args(&arg_refs) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("termfolio: {}", e);
            process::exit(1);
        }
    };

    if cli.show_help {
        println!("{}", args::usage());
        return;
    }
    if cli.show_version {
        println!("termfolio {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("termfolio: {}", e);
            process::exit(1);
        }
    }

    let mut portfolio = match &cli.content {
        Some(path) => match Portfolio::load(path) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                eprintln!("termfolio: {}", e);
                process::exit(1);
            }
        },
        None => Portfolio::default(),
    };
    if let Some(cv) = cli.cv {
        portfolio.cv_path = cv;
    }

    let theme = match cli.theme.as_deref() {
        None => Theme::default_dark(),
        Some(name) => match Theme::by_name(name) {
            Some(theme) => theme,
            None => {
                eprintln!("termfolio: unknown theme '{}' (built-in: dark, light)", name);
                process::exit(1);
            }
        },
    };

    tracing::info!("starting session");

    match Tui::new(portfolio, theme) {
        Ok(mut tui) => {
            if let Err(e) = tui.run() {
                eprintln!("termfolio: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("termfolio: failed to start: {}", e);
            process::exit(1);
        }
    }
}

/// Route tracing output to a file; stdout belongs to the UI.
///
/// The filter is taken from `TERMFOLIO_LOG` and defaults to `info`.
fn init_logging(path: &Path) -> Result<(), String> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {}", path.display(), e))?;

    let filter =
        EnvFilter::try_from_env("TERMFOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
