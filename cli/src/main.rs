//! Wifiqr CLI - Wi-Fi credentials from the environment as a QR code.

mod commands;
mod preview;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wifiqr_core::LayeredSource;

#[derive(Parser)]
#[command(name = "wifiqr")]
#[command(about = "Render Wi-Fi credentials as a QR code", long_about = None)]
struct Cli {
    /// Env-override file read before the process environment falls through
    /// (default: .env in the working directory or a parent)
    #[arg(short, long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the QR code as a PNG and open it (default)
    Generate {
        /// Directory for the image (default: next to the executable)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Do not open the saved image
        #[arg(long)]
        no_preview: bool,
    },
    /// Print the payload string only
    Payload,
    /// Show the settings and draw the code in the terminal
    Show,
}

const DEFAULT_LOG_DIRECTIVES: &str = "wifiqr=info,wifiqr_core=info";

/// `RUST_LOG` directives when given and valid, the crate defaults otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let cli = Cli::parse();

    let source = match &cli.env_file {
        Some(path) => LayeredSource::from_env_file(path),
        None => LayeredSource::from_dotenv(),
    };

    match cli.command.unwrap_or(Commands::Generate { output_dir: None, no_preview: false }) {
        Commands::Generate { output_dir, no_preview } => {
            commands::generate(&source, output_dir, !no_preview)?
        }
        Commands::Payload => commands::print_payload(&source)?,
        Commands::Show => commands::show(&source)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_keeps_user_level() {
        let filter = log_filter(Some("wifiqr_core=debug")).to_string();

        assert!(filter.contains("wifiqr_core=debug"));
        assert!(!filter.contains("wifiqr_core=info"));
    }

    #[test]
    fn test_log_filter_defaults() {
        let filter = log_filter(None).to_string();

        assert!(filter.contains("wifiqr=info"));
        assert!(filter.contains("wifiqr_core=info"));
    }
}
