//! キーバリューストレージ抽象化
//!
//! 文字列キーと文字列値だけを扱う永続化レイヤー。
//! 本番では FileStorage（永続）と MemoryStorage（セッション）を使い、
//! テストでは MemoryStorage を注入する。

mod memory;

pub use memory::MemoryStorage;

use crate::error::{QuoteError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// 永続ストレージのファイル名
pub const STORAGE_FILE: &str = "storage.json";

/// キーバリューストレージ操作を抽象化するトレイト
pub trait KeyValueStore: Send + Sync {
    /// 値を取得（存在しなければ None）
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 値を設定
    ///
    /// - 既存の値は上書き
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// ファイルベースの永続ストレージ
///
/// 全エントリを1つの JSON オブジェクトとして保持する。
/// 書き込みは一時ファイル経由でアトミックに置換する。
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// データディレクトリ配下の storage.json を使う
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// マップ全体を読み込み
    ///
    /// - ファイルが無ければ空
    /// - 壊れていれば警告を出して空として扱う（次の書き込みで置換される）
    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(QuoteError::Io(e)),
        };

        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                log::warn!(
                    "Ignoring corrupt storage file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)
            .map_err(|e| QuoteError::Storage(format!("Failed to create temp file: {}", e)))?;

        let content = serde_json::to_string_pretty(map)?;
        temp_file.write_all(content.as_bytes())?;

        temp_file.persist(&self.path).map_err(|e| {
            QuoteError::Storage(format!("Failed to persist {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| QuoteError::Storage("storage lock poisoned".to_string()))?;
        let mut map = self.read_map()?;
        f(&mut map);
        self.write_map(&map)
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        log::debug!("storage get {} from {}", key, self.path.display());
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
