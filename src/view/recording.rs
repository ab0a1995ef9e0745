//! テスト用の記録ビュー

use super::*;
use std::sync::Mutex;

/// 呼び出された描画操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Quote { text: String, category: String },
    Empty(String),
    Categories { categories: Vec<String>, selected: String },
    Notice { message: String, duration: Duration },
}

/// 描画呼び出しを記録するだけのビュー
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notice { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<ViewEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl QuoteView for RecordingView {
    fn render_quote(&self, text: &str, category: &str) {
        self.push(ViewEvent::Quote {
            text: text.to_string(),
            category: category.to_string(),
        });
    }

    fn render_empty_state(&self, message: &str) {
        self.push(ViewEvent::Empty(message.to_string()));
    }

    fn render_category_options(&self, categories: &[String], selected: &CategoryFilter) {
        self.push(ViewEvent::Categories {
            categories: categories.to_vec(),
            selected: selected.as_str().to_string(),
        });
    }

    fn show_transient_notice(&self, message: &str, duration: Duration) {
        self.push(ViewEvent::Notice {
            message: message.to_string(),
            duration,
        });
    }
}
