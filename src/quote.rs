//! 名言アイテムのドメイン型

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 初回起動時のデフォルト名言（本文, カテゴリ）
const DEFAULT_QUOTES: [(&str, &str); 5] = [
    (
        "The best way to predict the future is to create it.",
        "Motivation",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "Life",
    ),
    ("Be yourself; everyone else is already taken.", "Inspiration"),
    ("In the middle of difficulty lies opportunity.", "Motivation"),
    ("To be, or not to be, that is the question.", "Philosophy"),
];

/// 名言アイテム
///
/// `id` は作成時に払い出す安定IDで、コレクション内の位置とは独立している。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub text: String,
    pub category: String,
}

impl Quote {
    /// 本文とカテゴリをトリムして作成
    ///
    /// どちらかが空（空白のみ含む）なら None
    pub fn new(text: &str, category: &str) -> Option<Self> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// 本文とカテゴリが一致するか（IDは比較しない）
    pub fn same_content(&self, other: &Quote) -> bool {
        self.text == other.text && self.category == other.category
    }

    /// エクスポート形式に変換
    pub fn to_record(&self) -> QuoteRecord<'_> {
        QuoteRecord {
            text: &self.text,
            category: &self.category,
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}

/// エクスポートファイルの1件（IDを含まない）
#[derive(Debug, Serialize)]
pub struct QuoteRecord<'a> {
    pub text: &'a str,
    pub category: &'a str,
}

/// デフォルトの名言セットを新しいIDで生成
pub fn default_quotes() -> Vec<Quote> {
    DEFAULT_QUOTES
        .iter()
        .filter_map(|(text, category)| Quote::new(text, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_fields() {
        let quote = Quote::new("  hello  ", "\tWisdom\n").unwrap();
        assert_eq!(quote.text, "hello");
        assert_eq!(quote.category, "Wisdom");
    }

    #[test]
    fn new_rejects_blank_fields() {
        assert!(Quote::new("", "x").is_none());
        assert!(Quote::new("x", "").is_none());
        assert!(Quote::new("   ", "x").is_none());
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = Quote::new("same", "same").unwrap();
        let b = Quote::new("same", "same").unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.same_content(&b));
    }

    #[test]
    fn default_quotes_has_five_items() {
        let quotes = default_quotes();
        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes[0].category, "Motivation");
        assert_eq!(quotes[4].text, "To be, or not to be, that is the question.");
    }

    #[test]
    fn display_formats_text_and_category() {
        let quote = Quote::new("Stay hungry.", "Life").unwrap();
        assert_eq!(quote.to_string(), "\"Stay hungry.\" — Life");
    }

    #[test]
    fn record_omits_id() {
        let quote = Quote::new("A", "B").unwrap();
        let json = serde_json::to_value(quote.to_record()).unwrap();
        assert_eq!(json, serde_json::json!({"text": "A", "category": "B"}));
    }
}
