//! レジストリ内ファイルの読み出し
//!
//! ローカルディスクとリモート HTTP の2実装を持つ。どちらを使うかは
//! プロセス起動時に一度だけ決め、実行中に切り替えない。

mod local;
mod remote;

pub use local::LocalResolver;
pub use remote::RemoteResolver;

use crate::config::RegistrySettings;
use crate::error::Result;
use crate::http::HttpGet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// バックエンド種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Local,
    Remote,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Remote => "remote",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// レジストリ内ファイルの読み出し trait
pub trait FileResolver: Send + Sync {
    /// レジストリルートからの相対パスを読み出す
    fn read_file<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

    /// ファイルが存在するか
    fn file_exists<'a>(&'a self, path: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

    /// バックエンド種別
    fn kind(&self) -> BackendKind;

    /// 診断表示用の場所（ディレクトリまたはURL）
    fn location(&self) -> String;
}

/// 設定からバックエンドを選択
///
/// レジストリディレクトリに registry.json があればローカル、なければリモート。
pub fn select_resolver(settings: &RegistrySettings, http: Arc<dyn HttpGet>) -> Arc<dyn FileResolver> {
    if let (Some(dir), Some(manifest)) = (&settings.registry_dir, settings.manifest_path()) {
        if manifest.is_file() {
            tracing::debug!(dir = %dir.display(), "using local registry");
            return Arc::new(LocalResolver::new(dir.clone()));
        }
        tracing::debug!(manifest = %manifest.display(), "no local manifest, falling back to remote");
    }

    tracing::debug!(base_url = %settings.base_url, "using remote registry");
    Arc::new(RemoteResolver::new(settings.base_url.clone(), http))
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
