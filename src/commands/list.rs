//! qk list コマンド
//!
//! 保存済みの名言を一覧表示する。

use super::CommandContext;
use crate::filter::CategoryFilter;
use crate::quote::Quote;
use crate::selector::pick_pool;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Show only quotes in this category
    #[arg(long, short)]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let ctx = CommandContext::load()?;
    let quotes = ctx.book.quotes();
    let filter = args
        .category
        .as_deref()
        .map(CategoryFilter::parse)
        .unwrap_or(CategoryFilter::All);

    let matched = pick_pool(quotes, &filter);

    if args.json {
        print_json(&matched)
    } else {
        print_table(&matched, quotes.len());
        Ok(())
    }
}

fn print_json(quotes: &[&Quote]) -> Result<(), String> {
    serde_json::to_string_pretty(quotes)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize quotes: {}", e))
}

fn print_table(quotes: &[&Quote], total_count: usize) {
    if quotes.is_empty() {
        if total_count == 0 {
            println!("No quotes stored");
        } else {
            println!("No quotes matched");
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Quote", "Category"]);

    for quote in quotes {
        table.add_row(vec![
            short_id(quote),
            quote.text.clone(),
            quote.category.clone(),
        ]);
    }

    println!("{table}");
    println!("{} of {} quote(s)", quotes.len(), total_count);
}

/// ID を短縮表示（先頭8文字）
fn short_id(quote: &Quote) -> String {
    quote.id.simple().to_string()[..8].to_string()
}
