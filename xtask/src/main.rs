mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build, then required files).
    Preflight,
    /// Verify the repository's own required files with file-checker.
    RequiredFiles {
        /// Comma-separated list relative to the repository root (defaults to the release set)
        #[arg(value_name = "FILES")]
        files: Option<String>,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::RequiredFiles { files } => {
            cmd::required_files::run(files)?;
        }
    }
    Ok(())
}
