use clap::{Parser, Subcommand};

use crate::commands::{add, export, filter, import, list, show, sync, watch};

#[derive(Debug, Parser)]
#[command(name = "qk")]
#[command(about = "Quote Keeper CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 名言をランダムに表示
    Show(show::Args),

    /// カテゴリフィルタを変更
    Filter(filter::Args),

    /// 名言を追加
    Add(add::Args),

    /// 名言の一覧
    List(list::Args),

    /// カテゴリ一覧
    Categories,

    /// JSONファイルからインポート
    Import(import::Args),

    /// JSONファイルへエクスポート
    Export(export::Args),

    /// リモートと1回同期
    Sync(sync::Args),

    /// 定期同期しながら名言を表示し続ける
    Watch(watch::Args),
}
