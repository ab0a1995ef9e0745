//! 表示候補の選択
//!
//! フィルタ済みのプールから一様乱数で1件選び、
//! 最後に表示した位置をセッションストレージに記録する。

use crate::error::Result;
use crate::filter::CategoryFilter;
use crate::quote::Quote;
use crate::storage::KeyValueStore;
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

/// 最後に表示した位置（フィルタ前のコレクション上）
pub const LAST_QUOTE_INDEX_KEY: &str = "lastQuoteIndex";
/// 最後に表示したアイテムのID
pub const LAST_QUOTE_ID_KEY: &str = "lastQuoteId";

/// 選択結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick<'a> {
    Shown { quote: &'a Quote, index: usize },
    /// プールが空
    Empty,
}

/// 最後に表示したアイテムの記録
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastShown {
    pub index: usize,
    pub id: Option<Uuid>,
}

/// フィルタに一致するアイテムを元の順序のまま返す
pub fn pick_pool<'a>(quotes: &'a [Quote], filter: &CategoryFilter) -> Vec<&'a Quote> {
    quotes.iter().filter(|q| filter.matches(q)).collect()
}

/// プールから一様乱数で1件選ぶ（空なら None）
pub fn pick_random<'p, T, R>(pool: &'p [T], rng: &mut R) -> Option<&'p T>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.gen_range(0..pool.len()))
}

/// 空プール時の表示メッセージ
pub fn empty_message(filter: &CategoryFilter) -> &'static str {
    if filter.is_all() {
        "No quotes available."
    } else {
        "No quotes in this category."
    }
}

/// セレクタ
pub struct Selector {
    session: Arc<dyn KeyValueStore>,
}

impl Selector {
    pub fn new(session: Arc<dyn KeyValueStore>) -> Self {
        Self { session }
    }

    /// フィルタを適用して1件選び、表示位置を記録
    ///
    /// 記録する位置は選ばれたアイテムそのものの位置で、
    /// 同じ内容の重複があっても先頭一致にはならない。
    pub fn show<'a, R>(
        &self,
        quotes: &'a [Quote],
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> Result<Pick<'a>>
    where
        R: Rng + ?Sized,
    {
        let pool: Vec<(usize, &Quote)> = quotes
            .iter()
            .enumerate()
            .filter(|(_, q)| filter.matches(q))
            .collect();

        let Some(&(index, quote)) = pick_random(&pool, rng) else {
            return Ok(Pick::Empty);
        };

        self.session
            .set(LAST_QUOTE_INDEX_KEY, &index.to_string())?;
        self.session
            .set(LAST_QUOTE_ID_KEY, &quote.id.to_string())?;

        Ok(Pick::Shown { quote, index })
    }

    /// 最後に表示したアイテムの記録を取得
    pub fn last_shown(&self) -> Result<Option<LastShown>> {
        let index = self
            .session
            .get(LAST_QUOTE_INDEX_KEY)?
            .and_then(|raw| raw.parse::<usize>().ok());
        let Some(index) = index else {
            return Ok(None);
        };
        let id = self
            .session
            .get(LAST_QUOTE_ID_KEY)?
            .and_then(|raw| Uuid::parse_str(&raw).ok());
        Ok(Some(LastShown { index, id }))
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
