//! qk import コマンド
//!
//! `{text, category}` の配列を含む JSON ファイルを読み込み、末尾に追加する。

use super::CommandContext;
use crate::output::CommandSummary;
use crate::store::ImportOutcome;
use crate::view::TerminalView;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// JSON file to import
    pub file: PathBuf,
}

pub async fn run(args: Args) -> Result<(), String> {
    let raw = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("Failed to read {}: {}", args.file.display(), e))?;

    let mut ctx = CommandContext::load()?;
    let mut rng = rand::thread_rng();
    let outcome = ctx
        .book
        .import_json(&raw, &TerminalView, &mut rng)
        .map_err(|e| e.to_string())?;

    match outcome {
        ImportOutcome::Imported { accepted, dropped } => {
            CommandSummary::import(accepted, dropped).print();
            Ok(())
        }
        ImportOutcome::Rejected { reason } => Err(format!(
            "Failed to import {}: {}",
            args.file.display(),
            reason
        )),
    }
}
