//! HTTP 配信のレジストリ

use super::{BackendKind, FileResolver};
use crate::error::Result;
use crate::http::HttpGet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// リモートレジストリ
pub struct RemoteResolver {
    base_url: String,
    http: Arc<dyn HttpGet>,
}

impl RemoteResolver {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpGet>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// `<base>/<path>` を組み立てる
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl FileResolver for RemoteResolver {
    fn read_file<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.url_for(path);
            self.http.get_text(&url).await
        })
    }

    // マニフェストを正とみなし、存在確認のための通信はしない
    fn file_exists<'a>(&'a self, _path: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async { true })
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }
}
