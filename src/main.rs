//! # media-toolcheck
//!
//! Inspect the external tools a test run will find, and provision fixture
//! images by hand.
//!
//! ## Examples:
//! ```bash
//! media-toolcheck tools --json
//! media-toolcheck version imagemagick
//! media-toolcheck exists magick
//! media-toolcheck fixture /tmp/small.png --size 50x50 --color red
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use media_toolcheck::fixtures::{file_digest, image_dimensions};
use media_toolcheck::{Config, FixtureColor, ImageSize, TestHelper, ToolReport};

#[derive(Parser)]
#[command(name = "media-toolcheck")]
#[command(about = "Report external media tools and provision test fixtures")]
struct Args {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show availability of every known tool
    Tools {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a tool's version
    Version {
        /// Registered tool name, e.g. imagemagick
        name: String,
    },
    /// Probe a command with which/where
    Exists {
        cmd: String,
    },
    /// Write a fixture image
    Fixture {
        /// Destination file
        dest: PathBuf,

        /// Image size as WxH
        #[arg(short, long, default_value = "100x100")]
        size: ImageSize,

        /// Fixture color (red or blue)
        #[arg(short, long, default_value = "blue")]
        color: FixtureColor,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match args.config {
        Some(ref path) => Config::from_file(path)?.with_env_overrides(),
        None => Config::load()?,
    };
    let helper = TestHelper::new(config);

    match args.command {
        Commands::Tools { json } => {
            let report = ToolReport::collect(&helper);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Commands::Version { name } => {
            helper.get_tool(&name)?;
            let version = helper
                .tool_version(&name)
                .with_context(|| format!("{} is not available", name))?;
            println!("{}", version);
        }
        Commands::Exists { cmd } => {
            println!("{}", helper.command_exists(&cmd));
        }
        Commands::Fixture { dest, size, color } => {
            helper.create_test_image(&dest, size, color)?;
            let (width, height) = image_dimensions(&dest)?;
            info!("Fixture written to {}", dest.display());
            println!("{}x{} sha256:{}", width, height, file_digest(&dest)?);
        }
    }

    Ok(())
}
