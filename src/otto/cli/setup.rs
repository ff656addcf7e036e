use clap::Parser;
use directories::ProjectDirs;
use otto::error::{AssistantError, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "otto", bin_name = "otto", version)]
#[command(
    about = "Personal assistant for contacts, notes and file sorting",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the address book, notes and config.json
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Use the per-user data directory instead of the current one
    #[arg(short, long)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr so they never interleave with replies on stdout.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--data-dir` wins, then `--global`, then the current directory.
pub fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if cli.global {
        let dirs = ProjectDirs::from("com", "otto", "otto").ok_or_else(|| {
            AssistantError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine the user data directory",
            ))
        })?;
        return Ok(dirs.data_dir().to_path_buf());
    }
    Ok(std::env::current_dir()?)
}
