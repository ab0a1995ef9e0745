mod application;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod filter;
mod merge;
mod output;
mod quote;
mod remote;
mod selector;
mod storage;
mod store;
mod sync;
mod view;

use clap::Parser;
use env_logger::Env;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
