//! コマンド共通の初期化

use crate::application::QuoteBook;
use crate::config::AppConfig;
use crate::storage::{FileStorage, KeyValueStore, MemoryStorage};
use std::sync::Arc;

/// 設定と名言帳
pub struct CommandContext {
    pub config: AppConfig,
    pub book: QuoteBook,
}

impl CommandContext {
    /// 設定を読み込み、データディレクトリの名言帳を開く
    ///
    /// セッションストレージはプロセスの生存期間だけ有効
    pub fn load() -> Result<Self, String> {
        let config = AppConfig::load().map_err(|e| e.to_string())?;
        let storage = FileStorage::in_dir(&config.data_dir);
        log::debug!("Using storage file {}", storage.path().display());
        let local: Arc<dyn KeyValueStore> = Arc::new(storage);
        let session: Arc<dyn KeyValueStore> = Arc::new(MemoryStorage::new());
        let book = QuoteBook::open(local, session).map_err(|e| e.to_string())?;
        Ok(Self { config, book })
    }
}
