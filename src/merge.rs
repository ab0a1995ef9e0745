//! リモート取り込み時のマージ戦略
//!
//! ローカル側は追記のみ。戦略は「どの受信アイテムを末尾に追加するか」だけを決める。

use crate::quote::Quote;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// マージ戦略
pub trait MergeStrategy: Send + Sync {
    /// 戦略名（ログ用）
    fn name(&self) -> &'static str;

    /// 受信アイテムのうち、ローカル末尾に追加するものを返す
    fn merge(&self, local: &[Quote], incoming: Vec<Quote>) -> Vec<Quote>;
}

/// 受信アイテムを無条件にすべて追加する（リモート優先・単純和集合）
///
/// 同じ内容を繰り返し受信すれば重複は増え続ける。
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendAll;

impl MergeStrategy for AppendAll {
    fn name(&self) -> &'static str {
        "append"
    }

    fn merge(&self, _local: &[Quote], incoming: Vec<Quote>) -> Vec<Quote> {
        incoming
    }
}

/// 本文とカテゴリが既に存在するアイテムを追加しない
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipExisting;

impl MergeStrategy for SkipExisting {
    fn name(&self) -> &'static str {
        "skip-existing"
    }

    fn merge(&self, local: &[Quote], incoming: Vec<Quote>) -> Vec<Quote> {
        let mut accepted: Vec<Quote> = Vec::with_capacity(incoming.len());
        for quote in incoming {
            let seen = local
                .iter()
                .chain(accepted.iter())
                .any(|q| q.same_content(&quote));
            if !seen {
                accepted.push(quote);
            }
        }
        accepted
    }
}

/// 設定・CLI から選べるマージ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeKind {
    #[default]
    Append,
    SkipExisting,
}

impl MergeKind {
    pub fn strategy(self) -> Arc<dyn MergeStrategy> {
        match self {
            MergeKind::Append => Arc::new(AppendAll),
            MergeKind::SkipExisting => Arc::new(SkipExisting),
        }
    }
}
