//! rom-embed - embed a binary resource into a C header
//!
//! # Usage
//!
//! ```bash
//! # Verbatim embedding, array named after the file stem (tetris)
//! rom-embed roms/tetris.gb include/tetris.h
//!
//! # Custom array name
//! rom-embed roms/tetris.gb include/tetris.h --name bootrom
//!
//! # DEFLATE-compressed embedding with both size constants
//! rom-embed roms/tetris.gb include/tetris.h --compress --level 9
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use rom_embed::{compress, EmbedConfig, Mode};

#[derive(Parser)]
#[command(name = "rom-embed")]
#[command(about = "Embed a binary resource into a C header as a byte array")]
#[command(version)]
struct Cli {
    /// Input binary (e.g. a .gb ROM)
    input: PathBuf,

    /// Output header path
    output: PathBuf,

    /// Array identifier (defaults to the input filename stem,
    /// e.g. roms/tetris.gb -> tetris)
    #[arg(long)]
    name: Option<String>,

    /// Compress the resource with DEFLATE before embedding
    #[arg(short, long)]
    compress: bool,

    /// Compression level, 0-9 (only with --compress)
    #[arg(short, long, default_value_t = compress::DEFAULT_LEVEL, value_parser = clap::value_parser!(u32).range(0..=9))]
    level: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let mode = if cli.compress {
        Mode::Compressed { level: cli.level }
    } else {
        Mode::Verbatim
    };

    let config = EmbedConfig {
        input: cli.input,
        output: cli.output,
        name: cli.name,
        mode,
    };

    rom_embed::run(&config)?;

    Ok(())
}
