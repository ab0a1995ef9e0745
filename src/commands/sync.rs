//! qk sync コマンド
//!
//! リモートから1回だけ同期する。失敗してもローカルは変更せず終了コード 0。

use super::CommandContext;
use crate::merge::MergeKind;
use crate::output::CommandSummary;
use crate::remote::HttpSource;
use crate::sync::{SyncAgent, SyncOptions};
use crate::view::TerminalView;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// Merge strategy (overrides config)
    #[arg(long, value_enum)]
    pub merge: Option<MergeKind>,

    /// Endpoint URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let ctx = CommandContext::load()?;
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| ctx.config.sync.endpoint.clone());
    let merge = args.merge.unwrap_or(ctx.config.sync.merge);

    let source = HttpSource::new(endpoint.as_str(), &ctx.config.http);
    let options = SyncOptions::from_config(&ctx.config.sync);
    let agent = SyncAgent::new(
        ctx.book.into_shared(),
        source,
        Arc::new(TerminalView),
        options,
    )
    .with_merge(merge.strategy());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| e.to_string())?,
    );
    pb.set_message(format!("Syncing from {}...", endpoint));
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = agent.sync_once().await;
    pb.finish_and_clear();

    CommandSummary::sync(&outcome).print();
    Ok(())
}
