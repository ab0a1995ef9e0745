//! カテゴリフィルタ
//!
//! 既知カテゴリの一覧と、選択中のフィルタ値（キー `selectedCategory`）を管理する。

use crate::error::Result;
use crate::quote::Quote;
use crate::storage::KeyValueStore;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// 選択値の永続化キー
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// 「全カテゴリ」を表すセンチネル値
pub const ALL: &str = "all";

/// フィルタの選択値
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// 文字列から解釈（`"all"` と空文字は All）
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Category(name) => name,
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => quote.category == *name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 重複なし・昇順のカテゴリ一覧
pub fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
    quotes
        .iter()
        .map(|q| q.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// フィルタレジストリ
pub struct FilterRegistry {
    storage: Arc<dyn KeyValueStore>,
    categories: Vec<String>,
}

impl FilterRegistry {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            categories: Vec::new(),
        }
    }

    /// コレクションからカテゴリ一覧を再計算
    ///
    /// 永続化された選択値がもう存在しなければ `"all"` を保存し直す
    pub fn refresh_categories(&mut self, quotes: &[Quote]) -> Result<&[String]> {
        self.categories = distinct_categories(quotes);

        let stored = self.storage.get(SELECTED_CATEGORY_KEY)?;
        if let Some(raw) = stored {
            if self.resolve(&raw).is_all() && raw != ALL {
                log::debug!("Selected category '{}' no longer exists; resetting", raw);
                self.storage.set(SELECTED_CATEGORY_KEY, ALL)?;
            }
        }

        Ok(&self.categories)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// 選択中のフィルタ
    ///
    /// 未設定・読み取り失敗・既知カテゴリに無い値はすべて All
    pub fn selected(&self) -> CategoryFilter {
        match self.storage.get(SELECTED_CATEGORY_KEY) {
            Ok(Some(raw)) => self.resolve(&raw),
            Ok(None) => CategoryFilter::All,
            Err(e) => {
                log::warn!("Failed to read selected category: {}", e);
                CategoryFilter::All
            }
        }
    }

    /// 選択値を即時保存
    pub fn set_selected(&self, filter: &CategoryFilter) -> Result<()> {
        self.storage.set(SELECTED_CATEGORY_KEY, filter.as_str())
    }

    fn resolve(&self, raw: &str) -> CategoryFilter {
        match CategoryFilter::parse(raw) {
            CategoryFilter::Category(name) if self.categories.contains(&name) => {
                CategoryFilter::Category(name)
            }
            _ => CategoryFilter::All,
        }
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
