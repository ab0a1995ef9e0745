//! qk categories コマンド

use super::CommandContext;
use crate::view::{QuoteView, TerminalView};

pub async fn run() -> Result<(), String> {
    let ctx = CommandContext::load()?;

    if ctx.book.categories().is_empty() {
        println!("No categories");
        return Ok(());
    }

    TerminalView.render_category_options(ctx.book.categories(), &ctx.book.selected());
    Ok(())
}
