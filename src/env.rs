//! 環境変数ユーティリティ

/// データディレクトリ
pub const DATA_DIR_VAR: &str = "QK_DATA_DIR";
/// 同期先エンドポイント
pub const ENDPOINT_VAR: &str = "QK_SERVER_ENDPOINT";
/// 同期間隔（秒）
pub const SYNC_INTERVAL_VAR: &str = "QK_SYNC_INTERVAL";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列・空白のみはNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// 環境変数を数値として取得（パース不能ならNone）
    pub fn get_u64(key: &str) -> Option<u64> {
        Self::get(key).and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
