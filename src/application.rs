//! アプリケーション層
//!
//! UI から呼ばれるユースケースを提供する。

mod quote_book;

pub use quote_book::{QuoteBook, SharedBook, NOTICE_DURATION};
