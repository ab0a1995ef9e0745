//! qk show コマンド
//!
//! 選択中のカテゴリから名言を1件表示する。

use super::CommandContext;
use crate::filter::CategoryFilter;
use crate::view::TerminalView;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Pick from this category for this run only ("all" for every category)
    #[arg(long, short)]
    pub category: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let ctx = CommandContext::load()?;
    let view = TerminalView;
    let mut rng = rand::thread_rng();

    let shown = match args.category {
        // 一時指定は保存しない
        Some(category) => {
            ctx.book
                .show_filtered(&CategoryFilter::parse(&category), &view, &mut rng)
        }
        None => ctx.book.show_quote(&view, &mut rng),
    };
    shown.map_err(|e| e.to_string())
}
