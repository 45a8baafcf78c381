//! HTTP設定とレジストリ設定

use crate::env::EnvVar;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// デフォルトのレジストリ配信元（公開 raw CDN）
pub const DEFAULT_REGISTRY_URL: &str = "https://cdn.jsdelivr.net/gh/kitctl/registry@main";

/// レジストリマニフェストのファイル名
pub const MANIFEST_FILE: &str = "registry.json";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
    /// 一時的な失敗に対するリトライ回数
    pub max_retries: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(10)),
            user_agent: "kitctl-cli".to_string(),
            max_retries: 2,
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// レジストリの取得元設定
///
/// 優先順位: コマンドライン引数 > 環境変数 > デフォルト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// リモートモード時のベースURL（末尾スラッシュなし）
    pub base_url: String,
    /// ローカルモード判定に使うディレクトリ
    pub registry_dir: Option<PathBuf>,
}

impl RegistrySettings {
    /// 引数・環境変数・デフォルトから設定を解決
    pub fn resolve(url_flag: Option<&str>, dir_flag: Option<&Path>) -> Self {
        let base_url = url_flag
            .map(str::to_string)
            .or_else(|| EnvVar::get(EnvVar::REGISTRY_URL))
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

        let registry_dir = dir_flag
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::get(EnvVar::REGISTRY_DIR).map(PathBuf::from))
            .or_else(|| install_dir().map(|dir| dir.join("registry")));

        Self {
            base_url: normalize_base_url(&base_url),
            registry_dir,
        }
    }

    /// ローカルマニフェストの候補パス
    pub fn manifest_path(&self) -> Option<PathBuf> {
        self.registry_dir.as_ref().map(|dir| dir.join(MANIFEST_FILE))
    }
}

/// 末尾スラッシュを除去
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// 実行ファイルの配置ディレクトリ
fn install_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
