//! 同期エージェント
//!
//! 取得 → マージ → 保存 → カテゴリ再描画 → 通知 を1サイクルとして実行する。
//! 取得中はロックを保持しないため、他の操作や別サイクルと並行できる。

use super::options::SyncOptions;
use super::result::SyncOutcome;
use crate::application::SharedBook;
use crate::merge::{AppendAll, MergeStrategy};
use crate::quote::Quote;
use crate::remote::{RemoteRecord, RemoteSource};
use crate::view::QuoteView;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// 同期完了時の通知
pub const SYNC_NOTICE: &str = "Quotes synced from server (conflicts resolved in favor of server).";

/// 同期エージェント
pub struct SyncAgent<R: RemoteSource> {
    book: SharedBook,
    source: R,
    view: Arc<dyn QuoteView>,
    merge: Arc<dyn MergeStrategy>,
    options: SyncOptions,
    in_flight: AtomicBool,
}

/// 実行中フラグを保持し、drop で解放する
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<R: RemoteSource> SyncAgent<R> {
    /// マージ戦略は AppendAll（リモート優先・単純追記）
    pub fn new(
        book: SharedBook,
        source: R,
        view: Arc<dyn QuoteView>,
        options: SyncOptions,
    ) -> Self {
        Self {
            book,
            source,
            view,
            merge: Arc::new(AppendAll),
            options,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_merge(mut self, merge: Arc<dyn MergeStrategy>) -> Self {
        self.merge = merge;
        self
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// 同期を1回実行
    ///
    /// 失敗はログに残すだけで呼び出し元にエラーとして返さない
    pub async fn sync_once(&self) -> SyncOutcome {
        let _guard = if self.options.exclusive {
            match InFlightGuard::acquire(&self.in_flight) {
                Some(guard) => Some(guard),
                None => {
                    log::debug!("Sync already in flight; skipping");
                    return SyncOutcome::Skipped;
                }
            }
        } else {
            None
        };

        let records = match self.source.fetch().await {
            Ok(records) => records,
            Err(e) if e.is_remote() => {
                log::warn!("Server sync failed ({}): {}", self.source.describe(), e);
                return SyncOutcome::Failed(e.to_string());
            }
            Err(e) => {
                log::error!("Sync source {} errored: {}", self.source.describe(), e);
                return SyncOutcome::Failed(e.to_string());
            }
        };

        let fetched = records.len();
        let incoming = to_quotes(records, self.options.batch_size, &self.options.origin_category);

        let merged = {
            let mut book = self.book.lock().await;
            book.merge_remote(incoming, self.merge.as_ref(), self.view.as_ref())
        };

        match merged {
            Ok(appended) => {
                log::info!(
                    "Synced {} quote(s) from {} using '{}' merge",
                    appended,
                    self.source.describe(),
                    self.merge.name()
                );
                self.view
                    .show_transient_notice(SYNC_NOTICE, self.options.notice_duration);
                SyncOutcome::Synced { fetched, appended }
            }
            Err(e) => {
                log::warn!("Failed to store synced quotes: {}", e);
                SyncOutcome::Failed(e.to_string())
            }
        }
    }

    /// 定期同期を開始
    ///
    /// 起動直後に1回、その後 `interval` ごとに独立したタスクとして同期する。
    /// 返り値の JoinHandle を abort するとスケジュールが止まる。
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.options.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let agent = Arc::clone(&self);
                tokio::spawn(async move {
                    let outcome = agent.sync_once().await;
                    if outcome.is_synced() {
                        log::debug!("Scheduled sync appended {} quote(s)", outcome.appended());
                    }
                });
            }
        })
    }
}

/// 先頭 `batch_size` 件を名言に変換（title の無いレコードは除外）
fn to_quotes(records: Vec<RemoteRecord>, batch_size: usize, category: &str) -> Vec<Quote> {
    records
        .into_iter()
        .take(batch_size)
        .filter_map(|record| {
            let title = record.title?;
            Quote::new(&title, category)
        })
        .collect()
}

#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;
