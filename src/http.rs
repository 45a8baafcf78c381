//! 共通HTTPヘルパー
//!
//! リモートレジストリへの GET を抽象化する。テスト時は HttpGet を差し替えて
//! 呼び出し回数やURLを検証できる。

use crate::config::HttpConfig;
use crate::error::{KitError, Result};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// リトライ間隔の基準値（試行回数に比例して伸ばす）
const RETRY_BASE_DELAY: Duration = Duration::from_millis(100);

/// テキストを GET する HTTP レイヤー
pub trait HttpGet: Send + Sync {
    /// URL の本文を UTF-8 テキストとして取得
    ///
    /// - 2xx 以外は `KitError::FetchFailed`（ステータス付き）
    /// - タイムアウト・接続失敗も `KitError::FetchFailed`
    fn get_text<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// reqwest による本番実装
pub struct ReqwestHttp {
    client: Client,
    max_retries: u32,
}

impl ReqwestHttp {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            client: config.build_client(),
            max_retries: config.max_retries,
        }
    }
}

impl HttpGet for ReqwestHttp {
    fn get_text<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let client = &self.client;
        Box::pin(async move { with_retry(move || get_once(client, url), self.max_retries).await })
    }
}

async fn get_once(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url, "GET");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| KitError::from_transport(url, &e))?;

    if !response.status().is_success() {
        return Err(KitError::fetch_status(url, response.status().as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| KitError::from_transport(url, &e))
}

/// 一時的な失敗かどうか
pub fn is_retriable_error(error: &KitError) -> bool {
    error.is_retryable()
}

/// リトライ付きで非同期処理を実行
///
/// リトライ不可のエラーは即座に返す。`max_retries` は初回を含まない。
pub async fn with_retry<F, Fut, T>(mut operation: F, max_retries: u32) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_retries && is_retriable_error(&err) => {
                attempt += 1;
                tracing::debug!(attempt, error = %err, "retrying request");
                tokio::time::sleep(RETRY_BASE_DELAY * attempt).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
