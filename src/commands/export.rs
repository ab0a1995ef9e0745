//! qk export コマンド

use super::CommandContext;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// 既定の出力先
const DEFAULT_EXPORT_FILE: &str = "quotes.json";

#[derive(Debug, Parser)]
pub struct Args {
    /// Output file path
    #[arg(long, short, default_value = DEFAULT_EXPORT_FILE)]
    pub output: PathBuf,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let ctx = CommandContext::load()?;
    let json = ctx.book.export_json().map_err(|e| e.to_string())?;

    if args.stdout {
        println!("{json}");
        return Ok(());
    }

    std::fs::write(&args.output, json)
        .map_err(|e| format!("Failed to write {}: {}", args.output.display(), e))?;
    println!(
        "{} Exported {} quote(s) to {}",
        "✓".green(),
        ctx.book.quotes().len(),
        args.output.display()
    );
    Ok(())
}
