//! 同期オプションの定義

use crate::application::NOTICE_DURATION;
use crate::config::SyncConfig;
use std::time::Duration;

/// 同期オプション
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// 1回の同期で取り込む最大件数（レスポンス配列の先頭から）
    pub batch_size: usize,
    /// リモート由来アイテムのカテゴリ
    pub origin_category: String,
    /// 定期同期の間隔
    pub interval: Duration,
    /// true: 実行中の同期があれば新しい同期をスキップ
    pub exclusive: bool,
    /// 同期完了通知の表示時間
    pub notice_duration: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::from_config(&SyncConfig::default())
    }
}

impl SyncOptions {
    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            origin_category: config.origin_category.clone(),
            interval: config.interval(),
            exclusive: config.exclusive,
            notice_duration: NOTICE_DURATION,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
