//! qk add コマンド

use super::CommandContext;
use crate::store::AddOutcome;
use crate::view::TerminalView;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Quote text
    pub text: String,

    /// Category of the quote
    pub category: String,
}

pub async fn run(args: Args) -> Result<(), String> {
    let mut ctx = CommandContext::load()?;
    let mut rng = rand::thread_rng();

    let outcome = ctx
        .book
        .add_quote(&args.text, &args.category, &TerminalView, &mut rng)
        .map_err(|e| e.to_string())?;

    match outcome {
        AddOutcome::Added(quote) => {
            log::info!("Added quote {}", quote.id);
            Ok(())
        }
        AddOutcome::Rejected => Err("Both quote text and category are required".to_string()),
    }
}
