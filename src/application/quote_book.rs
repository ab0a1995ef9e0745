//! 名言帳
//!
//! ストア・フィルタ・セレクタを束ね、表示コラボレータへの描画まで行う。
//! 変更系の操作は必ず「保存 → カテゴリ再計算 → 描画」の順に進む。

use crate::error::Result;
use crate::filter::{CategoryFilter, FilterRegistry};
use crate::merge::MergeStrategy;
use crate::quote::Quote;
use crate::selector::{empty_message, LastShown, Pick, Selector};
use crate::storage::KeyValueStore;
use crate::store::{AddOutcome, ImportOutcome, QuoteStore};
use crate::view::QuoteView;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// インポート成功時の通知
pub const IMPORT_SUCCESS_NOTICE: &str = "Quotes imported successfully!";
/// インポート失敗時の通知
pub const IMPORT_FAILURE_NOTICE: &str = "Failed to import quotes: invalid JSON";
/// 通知の表示時間
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

/// 同期タスクと共有する名言帳
pub type SharedBook = Arc<Mutex<QuoteBook>>;

/// 名言帳
pub struct QuoteBook {
    store: QuoteStore,
    filter: FilterRegistry,
    selector: Selector,
}

impl QuoteBook {
    /// 永続ストレージとセッションストレージから開く
    pub fn open(local: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Result<Self> {
        let store = QuoteStore::load(local.clone());
        let mut filter = FilterRegistry::new(local);
        filter.refresh_categories(store.quotes())?;
        Ok(Self {
            store,
            filter,
            selector: Selector::new(session),
        })
    }

    pub fn into_shared(self) -> SharedBook {
        Arc::new(Mutex::new(self))
    }

    pub fn quotes(&self) -> &[Quote] {
        self.store.quotes()
    }

    pub fn categories(&self) -> &[String] {
        self.filter.categories()
    }

    pub fn selected(&self) -> CategoryFilter {
        self.filter.selected()
    }

    pub fn last_shown(&self) -> Result<Option<LastShown>> {
        self.selector.last_shown()
    }

    /// 選択中のフィルタで1件表示
    pub fn show_quote<R>(&self, view: &dyn QuoteView, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        self.show_filtered(&self.filter.selected(), view, rng)
    }

    /// 指定フィルタで1件表示（選択は保存しない）
    pub fn show_filtered<R>(
        &self,
        filter: &CategoryFilter,
        view: &dyn QuoteView,
        rng: &mut R,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        match self.selector.show(self.store.quotes(), filter, rng)? {
            Pick::Shown { quote, .. } => view.render_quote(&quote.text, &quote.category),
            Pick::Empty => view.render_empty_state(empty_message(filter)),
        }
        Ok(())
    }

    /// フィルタを変更して保存し、1件表示
    pub fn change_filter<R>(
        &mut self,
        filter: CategoryFilter,
        view: &dyn QuoteView,
        rng: &mut R,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        self.filter.set_selected(&filter)?;
        self.show_filtered(&filter, view, rng)
    }

    /// カテゴリ一覧を再計算して描画
    pub fn refresh(&mut self, view: &dyn QuoteView) -> Result<()> {
        self.filter.refresh_categories(self.store.quotes())?;
        view.render_category_options(self.filter.categories(), &self.filter.selected());
        Ok(())
    }

    /// 名言を追加
    ///
    /// 追加できた場合のみカテゴリを再計算し、1件表示する
    pub fn add_quote<R>(
        &mut self,
        text: &str,
        category: &str,
        view: &dyn QuoteView,
        rng: &mut R,
    ) -> Result<AddOutcome>
    where
        R: Rng + ?Sized,
    {
        let outcome = self.store.add(text, category)?;
        if let AddOutcome::Added(_) = outcome {
            self.refresh(view)?;
            self.show_quote(view, rng)?;
        }
        Ok(outcome)
    }

    /// JSON 文字列からインポート
    ///
    /// 成否はどちらも通知で知らせる。入力全体が不正なら変更しない
    pub fn import_json<R>(
        &mut self,
        raw: &str,
        view: &dyn QuoteView,
        rng: &mut R,
    ) -> Result<ImportOutcome>
    where
        R: Rng + ?Sized,
    {
        let outcome = self.store.import_items(raw)?;
        match &outcome {
            ImportOutcome::Imported { .. } => {
                self.refresh(view)?;
                view.show_transient_notice(IMPORT_SUCCESS_NOTICE, NOTICE_DURATION);
                self.show_quote(view, rng)?;
            }
            ImportOutcome::Rejected { reason } => {
                log::debug!("Import rejected: {}", reason);
                view.show_transient_notice(IMPORT_FAILURE_NOTICE, NOTICE_DURATION);
            }
        }
        Ok(outcome)
    }

    /// リモート受信分をマージしてカテゴリを再描画
    pub fn merge_remote(
        &mut self,
        incoming: Vec<Quote>,
        strategy: &dyn MergeStrategy,
        view: &dyn QuoteView,
    ) -> Result<usize> {
        let added = self.store.merge_remote(incoming, strategy)?;
        self.refresh(view)?;
        Ok(added)
    }

    pub fn export_json(&self) -> Result<String> {
        self.store.export_json()
    }
}

#[cfg(test)]
#[path = "quote_book_test.rs"]
mod tests;
