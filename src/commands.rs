use crate::cli::{Cli, Command};

pub mod add;
pub mod categories;
mod context;
pub mod export;
pub mod filter;
pub mod import;
pub mod list;
pub mod show;
pub mod sync;
pub mod watch;

pub(crate) use context::CommandContext;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Show(args) => show::run(args).await,
        Command::Filter(args) => filter::run(args).await,
        Command::Add(args) => add::run(args).await,
        Command::List(args) => list::run(args).await,
        Command::Categories => categories::run().await,
        Command::Import(args) => import::run(args).await,
        Command::Export(args) => export::run(args).await,
        Command::Sync(args) => sync::run(args).await,
        Command::Watch(args) => watch::run(args).await,
    }
}
