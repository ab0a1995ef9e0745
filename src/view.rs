//! 表示コラボレータ
//!
//! コアロジックから呼び出される描画インターフェース。
//! 端末向けの実装として TerminalView を提供する。

use crate::filter::CategoryFilter;
use chrono::Local;
use owo_colors::OwoColorize;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// 表示インターフェース
pub trait QuoteView: Send + Sync {
    /// 名言を表示
    fn render_quote(&self, text: &str, category: &str);

    /// 表示できる名言が無い状態を表示
    fn render_empty_state(&self, message: &str);

    /// カテゴリ選択肢を表示（昇順・重複なし）
    fn render_category_options(&self, categories: &[String], selected: &CategoryFilter);

    /// 一定時間だけ表示する通知
    fn show_transient_notice(&self, message: &str, duration: Duration);
}

/// 端末向け実装
///
/// 端末では出力を消せないため、通知は `duration` 経過後に期限切れの行を出す。
/// tokio ランタイム外では期限切れの行は出さない。
#[derive(Debug, Default)]
pub struct TerminalView;

impl QuoteView for TerminalView {
    fn render_quote(&self, text: &str, category: &str) {
        println!("\"{}\" — {}", text.bold(), category.cyan());
    }

    fn render_empty_state(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn render_category_options(&self, categories: &[String], selected: &CategoryFilter) {
        let mut options = Vec::with_capacity(categories.len() + 1);
        options.push(format_option("All Categories", selected.is_all()));
        for category in categories {
            options.push(format_option(
                category,
                selected.as_str() == category && !selected.is_all(),
            ));
        }
        println!("{} {}", "Categories:".bold(), options.join("  "));
    }

    fn show_transient_notice(&self, message: &str, duration: Duration) {
        let now = Local::now().format("%H:%M:%S");
        println!("{} {}", format!("[{}]", now).dimmed(), message.yellow());
        expire_notice(message, duration, |line| println!("{}", line.dimmed()));
    }
}

/// `duration` 後に期限切れの行を `emit` に渡すタスクを起動
///
/// ランタイム外なら何もしない
fn expire_notice<F>(message: &str, duration: Duration, emit: F) -> Option<JoinHandle<()>>
where
    F: FnOnce(String) + Send + 'static,
{
    let handle = Handle::try_current().ok()?;
    let line = format!("(notice expired) {}", message);
    Some(handle.spawn(async move {
        tokio::time::sleep(duration).await;
        emit(line);
    }))
}

fn format_option(label: &str, selected: bool) -> String {
    if selected {
        format!("[{}]", label).green().to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
pub mod recording;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn notice_expires_after_duration() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();

        let handle = expire_notice("Synced", Duration::from_millis(20), move |line| {
            sink.lock().unwrap().push(line)
        })
        .unwrap();

        assert!(lines.lock().unwrap().is_empty());
        handle.await.unwrap();
        assert_eq!(
            *lines.lock().unwrap(),
            vec!["(notice expired) Synced".to_string()]
        );
    }

    #[test]
    fn notice_outside_runtime_does_not_expire() {
        assert!(expire_notice("Synced", Duration::from_millis(1), |_| {}).is_none());
    }
}
