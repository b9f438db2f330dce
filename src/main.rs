//! evalview - review OCR/extraction evaluation runs in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use evalview::LaunchOptions;

/// Review OCR/extraction evaluation runs in the terminal
#[derive(Parser, Debug)]
#[command(name = "evalview", version)]
#[command(about = "Review OCR/extraction evaluation runs in the terminal", long_about = None)]
struct Args {
    /// Directory holding <timestamp>/results.json run folders
    #[arg(value_name = "RESULTS_DIR")]
    results_dir: Option<PathBuf>,

    /// Config file to use instead of .evalview/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default .evalview/config.toml and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = std::env::current_dir()?;

    if args.init {
        evalview::init_config(&base_path)?;
        println!(
            "Wrote {}",
            base_path.join(".evalview").join("config.toml").display()
        );
        return Ok(());
    }

    evalview::run(LaunchOptions {
        base_path,
        results_dir: args.results_dir,
        config_path: args.config,
    })
    .await?;

    Ok(())
}
