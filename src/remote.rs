//! リモート同期元
//!
//! GET で JSON 配列を返すエンドポイントからレコードを取得する。
//! 各レコードで使うのは `title` フィールドのみ。

use crate::config::HttpConfig;
use crate::error::{QuoteError, Result};
use reqwest::Client;
use serde_json::Value;
use std::future::Future;

/// リモートレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRecord {
    /// `title` が文字列でなければ None
    pub title: Option<String>,
}

/// 同期元を抽象化するトレイト
///
/// テスト時は固定レスポンスの実装を注入する。
pub trait RemoteSource: Send + Sync + 'static {
    /// レコード一覧を取得
    fn fetch(&self) -> impl Future<Output = Result<Vec<RemoteRecord>>> + Send;

    /// ログ表示用の同期元名
    fn describe(&self) -> String;
}

/// HTTP 同期元
pub struct HttpSource {
    client: Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, http: &HttpConfig) -> Self {
        Self {
            client: http.build_client(),
            endpoint: endpoint.into(),
        }
    }
}

impl RemoteSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<RemoteRecord>> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuoteError::RemoteApi {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// レスポンス本文をレコード一覧に変換
///
/// - JSON でない、または配列でなければ Err
/// - 配列要素がオブジェクトでない場合も title なしのレコードとして数える
pub fn parse_records(body: &str) -> Result<Vec<RemoteRecord>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| QuoteError::RemoteFormat(format!("invalid JSON: {}", e)))?;

    let Value::Array(entries) = value else {
        return Err(QuoteError::RemoteFormat(
            "expected a JSON array".to_string(),
        ));
    };

    Ok(entries
        .iter()
        .map(|entry| RemoteRecord {
            title: entry
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
        .collect())
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
