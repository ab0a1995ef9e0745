//! 設定（config.toml + 環境変数）とHTTPクライアント構築

use crate::env::{EnvVar, DATA_DIR_VAR, ENDPOINT_VAR, SYNC_INTERVAL_VAR};
use crate::error::{QuoteError, Result};
use crate::merge::MergeKind;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 設定ファイル名（データディレクトリ直下）
pub const CONFIG_FILE: &str = "config.toml";

/// デフォルトの同期元
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// 同期設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// 同期元URL
    pub endpoint: String,
    /// 同期間隔（秒）
    pub interval_secs: u64,
    /// 1回の同期で取り込む最大件数
    pub batch_size: usize,
    /// リモート由来アイテムに付けるカテゴリ
    pub origin_category: String,
    /// true: 同期の重複実行を防ぐ
    pub exclusive: bool,
    /// マージ戦略
    pub merge: MergeKind,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_secs: 30,
            batch_size: 5,
            origin_category: "Server".to_string(),
            exclusive: false,
            merge: MergeKind::Append,
        }
    }
}

impl SyncConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// HTTP設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// タイムアウト（秒）。未設定なら無制限
    pub timeout_secs: Option<u64>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: format!("qk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    ///
    /// 設定から構築できなければ警告を出してデフォルトのクライアントを使う
    pub fn build_client(&self) -> Client {
        self.try_build_client().unwrap_or_else(|e| {
            log::warn!("Ignoring [http] settings, falling back to defaults: {}", e);
            Client::new()
        })
    }

    fn try_build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }
}

/// config.toml のルート構造
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    sync: SyncConfig,
    http: HttpConfig,
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub sync: SyncConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    /// デフォルトのデータディレクトリから読み込み
    ///
    /// 優先順位: 環境変数 > config.toml > デフォルト値
    pub fn load() -> Result<Self> {
        Self::load_from(default_data_dir()?)
    }

    pub fn load_from(data_dir: PathBuf) -> Result<Self> {
        let file = read_config_file(&data_dir.join(CONFIG_FILE))?;
        let mut config = Self {
            data_dir,
            sync: file.sync,
            http: file.http,
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Some(endpoint) = EnvVar::get(ENDPOINT_VAR) {
            self.sync.endpoint = endpoint;
        }
        if let Some(secs) = EnvVar::get_u64(SYNC_INTERVAL_VAR) {
            self.sync.interval_secs = secs;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.sync.interval_secs == 0 {
            return Err(QuoteError::Config(
                "sync.interval_secs must be at least 1".to_string(),
            ));
        }
        if self.sync.batch_size == 0 {
            return Err(QuoteError::Config(
                "sync.batch_size must be at least 1".to_string(),
            ));
        }
        if self.sync.origin_category.trim().is_empty() {
            return Err(QuoteError::Config(
                "sync.origin_category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(QuoteError::Io(e)),
    }
}

/// データディレクトリ（QK_DATA_DIR > ~/.qk）
fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = EnvVar::get(DATA_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }
    let home = EnvVar::get("HOME").ok_or_else(|| {
        QuoteError::Config(format!(
            "HOME not set; set {} explicitly",
            DATA_DIR_VAR
        ))
    })?;
    Ok(PathBuf::from(home).join(".qk"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
