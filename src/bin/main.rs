//! Block Colors CLI
//!
//! Derive block colors and attributes from texture assets.

use block_colors::{extract_colors, write_colors};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "block-colors")]
#[command(author, version, about = "Derive block colors from texture assets", long_about = None)]
struct Cli {
    /// Input block catalog JSON file
    blocks: PathBuf,

    /// Asset directory containing <texture>.png images
    assets: PathBuf,

    /// Output colors JSON file
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    println!("Loading block catalog from {:?}...", cli.blocks);
    let colors = extract_colors(&cli.blocks, &cli.assets)?;
    println!("  Derived colors for {} blocks", colors.len());

    write_colors(&colors, &cli.output)?;
    println!("Wrote color table to {:?}", cli.output);

    Ok(())
}
