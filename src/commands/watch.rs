//! qk watch コマンド
//!
//! 定期同期を動かしながら、標準入力のコマンドで名言を表示し続ける。
//!
//! - 空行 / `n`: 次の名言
//! - `f <category>`: フィルタ変更
//! - `c`: カテゴリ一覧
//! - `l`: 最後に表示した名言の位置
//! - `q`: 終了

use super::CommandContext;
use crate::filter::CategoryFilter;
use crate::merge::MergeKind;
use crate::quote::Quote;
use crate::remote::HttpSource;
use crate::selector::LastShown;
use crate::sync::{SyncAgent, SyncOptions};
use crate::view::{QuoteView, TerminalView};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
pub struct Args {
    /// Sync interval in seconds (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Skip a scheduled sync while the previous one is still running
    #[arg(long)]
    pub exclusive: bool,

    /// Merge strategy (overrides config)
    #[arg(long, value_enum)]
    pub merge: Option<MergeKind>,
}

/// 対話入力
#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchCommand {
    Next,
    Filter(CategoryFilter),
    Categories,
    LastShown,
    Quit,
    Unknown(String),
}

fn parse_watch_command(line: &str) -> WatchCommand {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some(("f", rest)) => WatchCommand::Filter(CategoryFilter::parse(rest.trim())),
        _ => match line {
            "" | "n" => WatchCommand::Next,
            "f" => WatchCommand::Filter(CategoryFilter::All),
            "c" => WatchCommand::Categories,
            "l" => WatchCommand::LastShown,
            "q" => WatchCommand::Quit,
            other => WatchCommand::Unknown(other.to_string()),
        },
    }
}

/// 最後に表示した名言の位置（1始まり）と、同期で内容が動いていればその旨
fn describe_last_shown(marker: &LastShown, quotes: &[Quote]) -> String {
    let position = marker.index + 1;
    match quotes.get(marker.index) {
        Some(quote) if marker.id.map_or(true, |id| id == quote.id) => {
            format!("Last shown: #{} {}", position, quote)
        }
        _ => format!("Last shown: #{} (no longer at this position)", position),
    }
}

pub async fn run(args: Args) -> Result<(), String> {
    let ctx = CommandContext::load()?;

    let mut options = SyncOptions::from_config(&ctx.config.sync);
    if let Some(secs) = args.interval {
        options = options.with_interval(Duration::from_secs(secs));
    }
    if args.exclusive {
        options = options.with_exclusive(true);
    }
    let merge = args.merge.unwrap_or(ctx.config.sync.merge);

    let view: Arc<TerminalView> = Arc::new(TerminalView);
    let book = ctx.book.into_shared();
    let source = HttpSource::new(ctx.config.sync.endpoint.as_str(), &ctx.config.http);

    {
        let guard = book.lock().await;
        view.render_category_options(guard.categories(), &guard.selected());
        guard
            .show_quote(view.as_ref(), &mut rand::thread_rng())
            .map_err(|e| e.to_string())?;
    }

    let agent = Arc::new(
        SyncAgent::new(book.clone(), source, view.clone(), options).with_merge(merge.strategy()),
    );
    log::info!(
        "Watching with {}s sync interval",
        agent.options().interval.as_secs()
    );
    let schedule = agent.spawn();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let result = loop {
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => break Ok(()),
            line = lines.next_line() => line,
        };
        let line = match line {
            Ok(Some(line)) => line,
            // 入力終了
            Ok(None) => break Ok(()),
            Err(e) => break Err(format!("Failed to read input: {}", e)),
        };

        let mut guard = book.lock().await;
        let mut rng = rand::thread_rng();
        let handled = match parse_watch_command(&line) {
            WatchCommand::Next => guard.show_quote(view.as_ref(), &mut rng),
            WatchCommand::Filter(filter) => guard.change_filter(filter, view.as_ref(), &mut rng),
            WatchCommand::Categories => {
                view.render_category_options(guard.categories(), &guard.selected());
                Ok(())
            }
            WatchCommand::LastShown => guard.last_shown().map(|marker| match marker {
                Some(marker) => println!("{}", describe_last_shown(&marker, guard.quotes())),
                None => println!("No quote shown yet"),
            }),
            WatchCommand::Quit => break Ok(()),
            WatchCommand::Unknown(input) => {
                eprintln!(
                    "Warning: Unknown command '{}' (n, f <category>, c, l, q)",
                    input
                );
                Ok(())
            }
        };
        if let Err(e) = handled {
            break Err(e.to_string());
        }
    };

    schedule.abort();
    result
}
