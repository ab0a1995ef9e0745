//! 同期結果の定義

/// 1回の同期サイクルの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// 取得・保存まで完了
    Synced {
        /// 受信したレコード数
        fetched: usize,
        /// 追加したアイテム数
        appended: usize,
    },
    /// 取得または保存に失敗（ローカルは変更なし）
    Failed(String),
    /// 別の同期が実行中のためスキップ
    Skipped,
}

impl SyncOutcome {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced { .. })
    }

    /// 追加件数（失敗・スキップは 0）
    pub fn appended(&self) -> usize {
        match self {
            SyncOutcome::Synced { appended, .. } => *appended,
            _ => 0,
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod tests;
