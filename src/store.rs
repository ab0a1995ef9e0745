//! 名言ストア
//!
//! 名言コレクションのメモリ上の状態と、キー `quotes` への永続化を管理する。
//!
//! ## ライフサイクル
//!
//! ```text
//!   load() ──▶ 永続データあり & 正常 ──▶ そのまま使用（ID欠損は補完して再保存）
//!          └─▶ 無し / 壊れている  ──▶ デフォルトセットで置換して保存
//!
//!   add() / import_items() / merge_remote()
//!          ──▶ コピー上で追記 ──▶ 保存成功 ──▶ コミット
//!                              └─▶ 保存失敗 ──▶ メモリ上も変更なし
//! ```

use crate::error::Result;
use crate::merge::MergeStrategy;
use crate::quote::{default_quotes, Quote, QuoteRecord};
use crate::storage::KeyValueStore;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// コレクションの永続化キー
pub const QUOTES_KEY: &str = "quotes";

/// 永続化形式の1件
///
/// 旧形式は id を持たない。UUID として読めない id は振り直す
#[derive(Debug, Deserialize)]
struct StoredQuote {
    #[serde(default)]
    id: Option<Value>,
    text: String,
    category: String,
}

/// 追加操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Quote),
    /// 本文またはカテゴリが空。変更なし
    Rejected,
}

/// インポート操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// 配列として解釈できた。不正なエントリは `dropped` に数える
    Imported { accepted: usize, dropped: usize },
    /// 入力全体が不正。変更なし
    Rejected { reason: String },
}

/// 名言ストア
pub struct QuoteStore {
    storage: Arc<dyn KeyValueStore>,
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// 永続データを読み込む
    ///
    /// 致命的エラーにはならない。読めない・壊れている場合はデフォルトセットに戻す。
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let raw = match storage.get(QUOTES_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to read stored quotes: {}", e);
                None
            }
        };

        let decoded = match raw.as_deref().map(decode) {
            Some(Ok(decoded)) => Some(decoded),
            Some(Err(reason)) => {
                log::warn!("Stored quotes are malformed ({}); restoring defaults", reason);
                None
            }
            None => None,
        };

        match decoded {
            Some((quotes, repaired)) => {
                let store = Self { storage, quotes };
                if repaired {
                    store.save_or_warn();
                }
                store
            }
            None => {
                let store = Self {
                    storage,
                    quotes: default_quotes(),
                };
                store.save_or_warn();
                store
            }
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// コレクション全体を保存（上書き）
    pub fn save(&self) -> Result<()> {
        persist(self.storage.as_ref(), &self.quotes)
    }

    fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            log::warn!("Failed to persist quotes: {}", e);
        }
    }

    /// 追記して保存。保存できた場合のみメモリ上に反映する
    fn append(&mut self, items: Vec<Quote>) -> Result<()> {
        let mut next = Vec::with_capacity(self.quotes.len() + items.len());
        next.extend_from_slice(&self.quotes);
        next.extend(items);
        persist(self.storage.as_ref(), &next)?;
        self.quotes = next;
        Ok(())
    }

    /// 名言を追加
    ///
    /// - 前後の空白は除去
    /// - どちらかが空なら何もしない（エラーにもしない）
    pub fn add(&mut self, text: &str, category: &str) -> Result<AddOutcome> {
        let Some(quote) = Quote::new(text, category) else {
            return Ok(AddOutcome::Rejected);
        };
        self.append(vec![quote.clone()])?;
        Ok(AddOutcome::Added(quote))
    }

    /// 外部から与えられた JSON 文字列を取り込む
    pub fn import_items(&mut self, raw: &str) -> Result<ImportOutcome> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.import_value(value),
            Err(e) => Ok(ImportOutcome::Rejected {
                reason: format!("invalid JSON: {}", e),
            }),
        }
    }

    /// 解析済みの JSON 値を取り込む
    ///
    /// - 配列でなければ Rejected（変更なし）
    /// - `text` と `category` が文字列（かつ空でない）エントリのみ採用
    pub fn import_value(&mut self, value: Value) -> Result<ImportOutcome> {
        let Value::Array(entries) = value else {
            return Ok(ImportOutcome::Rejected {
                reason: "expected a JSON array".to_string(),
            });
        };

        let total = entries.len();
        let accepted: Vec<Quote> = entries
            .iter()
            .filter_map(|entry| {
                let text = entry.get("text").and_then(Value::as_str)?;
                let category = entry.get("category").and_then(Value::as_str)?;
                Quote::new(text, category)
            })
            .collect();
        let accepted_count = accepted.len();

        self.append(accepted)?;

        Ok(ImportOutcome::Imported {
            accepted: accepted_count,
            dropped: total - accepted_count,
        })
    }

    /// リモートから受信したアイテムを戦略に従って追記
    ///
    /// 追加した件数を返す
    pub fn merge_remote(
        &mut self,
        incoming: Vec<Quote>,
        strategy: &dyn MergeStrategy,
    ) -> Result<usize> {
        let additions = strategy.merge(&self.quotes, incoming);
        let count = additions.len();
        self.append(additions)?;
        Ok(count)
    }

    /// エクスポート用 JSON（2スペースインデント、IDなし）
    pub fn export_json(&self) -> Result<String> {
        let records: Vec<QuoteRecord<'_>> = self.quotes.iter().map(Quote::to_record).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

fn persist(storage: &dyn KeyValueStore, quotes: &[Quote]) -> Result<()> {
    let content = serde_json::to_string(quotes)?;
    storage.set(QUOTES_KEY, &content)
}

/// 永続化文字列を検証してデコード
///
/// 戻り値の bool は ID を補完・振り直したかどうか
fn decode(raw: &str) -> std::result::Result<(Vec<Quote>, bool), String> {
    let stored: Vec<StoredQuote> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seen = HashSet::with_capacity(stored.len());
    let mut repaired = false;
    let mut quotes = Vec::with_capacity(stored.len());

    for (index, entry) in stored.into_iter().enumerate() {
        if entry.text.trim().is_empty() || entry.category.trim().is_empty() {
            return Err(format!("entry {} has an empty field", index));
        }
        let parsed = entry
            .id
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|raw| Uuid::parse_str(raw).ok());
        let id = match parsed {
            Some(id) if seen.insert(id) => id,
            _ => {
                repaired = true;
                let id = Uuid::new_v4();
                seen.insert(id);
                id
            }
        };
        quotes.push(Quote {
            id,
            text: entry.text,
            category: entry.category,
        });
    }

    Ok((quotes, repaired))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
