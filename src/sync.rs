//! 同期 Feature
//!
//! リモート同期元から名言を定期的に取り込む。
//!
//! ## 使い方
//!
//! ```ignore
//! use qk::sync::{SyncAgent, SyncOptions};
//!
//! let agent = Arc::new(SyncAgent::new(book, source, view, SyncOptions::default()));
//!
//! // 起動直後に1回、その後は interval ごとに同期
//! let handle = agent.clone().spawn();
//!
//! // 停止（実行中の同期はそのまま完了する）
//! handle.abort();
//! ```

mod agent;
mod options;
mod result;

pub use agent::SyncAgent;
pub use options::SyncOptions;
pub use result::SyncOutcome;
