//! Photo Date Sorter - move photos into folders by capture date
//!
//! Scans one directory (not recursively) and moves every `.jpg` and `.heic`
//! file into `YYYY/YYYY-MM/YYYY-MM-DD/` according to its EXIF capture date.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use photo_date_sorter::{Cli, ExifDecoder, Organizer};
use std::io::{self, Write};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.dir_is_empty() {
        setup_logging();
    }

    let code = run(&cli, &mut io::stdout())?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Run one organizing pass and return the process exit code
fn run(cli: &Cli, out: &mut impl Write) -> Result<i32> {
    if cli.dir_is_empty() {
        writeln!(out, "Directory path must be specified")?;
        write!(out, "{}", Cli::command().render_help())?;
        return Ok(1);
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Photo Date Sorter starting"
    );

    let mut organizer = Organizer::new(cli.to_config(), ExifDecoder::new());

    if let Err(e) = organizer.run() {
        error!(error = %e, "Organizing failed");
        return Ok(1);
    }

    writeln!(out, "\nDone!")?;
    Ok(0)
}

/// Setup console logging on stderr, level overridable through RUST_LOG
fn setup_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn cli_for(dir: &str) -> Cli {
        Cli::try_parse_from(["photo-date-sorter", "--dir", dir]).unwrap()
    }

    #[test]
    fn test_empty_dir_prints_usage_and_exits_1() {
        let mut out = Vec::new();
        let code = run(&cli_for(""), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(code, 1);
        assert!(out.starts_with("Directory path must be specified"));
        assert!(out.contains("Usage:"));
        assert!(out.contains("--dir"));
        assert!(!out.contains("Done!"));
    }

    #[test]
    fn test_missing_root_exits_nonzero() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("missing");
        let mut out = Vec::new();

        let code = run(&cli_for(root.to_str().unwrap()), &mut out).unwrap();

        assert_ne!(code, 0);
        assert!(out.is_empty());
        assert!(!root.exists());
    }

    #[test]
    fn test_successful_run_prints_done() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("notes.txt"), "shopping list").unwrap();
        let mut out = Vec::new();

        let code = run(&cli_for(root.to_str().unwrap()), &mut out).unwrap();

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "\nDone!\n");
        assert!(root.join("notes.txt").is_file());
    }
}
