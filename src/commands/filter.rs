//! qk filter コマンド
//!
//! カテゴリフィルタを変更して保存し、そのカテゴリから1件表示する。

use super::CommandContext;
use crate::filter::CategoryFilter;
use crate::view::TerminalView;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Category to select ("all" for every category)
    pub category: String,
}

pub async fn run(args: Args) -> Result<(), String> {
    let mut ctx = CommandContext::load()?;
    let filter = CategoryFilter::parse(&args.category);

    if let CategoryFilter::Category(name) = &filter {
        if !ctx.book.categories().contains(name) {
            eprintln!("Warning: Unknown category '{}'", name);
        }
    }

    let mut rng = rand::thread_rng();
    ctx.book
        .change_filter(filter, &TerminalView, &mut rng)
        .map_err(|e| e.to_string())
}
