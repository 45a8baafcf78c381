//! レジストリのロードとプロセス内キャッシュ

use super::model::Registry;
use crate::config::MANIFEST_FILE;
use crate::error::{KitError, Result};
use crate::resolver::FileResolver;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// レジストリローダー
///
/// 初回 `load` で registry.json を読み、以降はキャッシュを返す。
/// キャッシュはこの値の寿命（1回のコマンド実行）に限られる。
pub struct RegistryLoader {
    resolver: Arc<dyn FileResolver>,
    cache: OnceCell<Registry>,
}

impl RegistryLoader {
    pub fn new(resolver: Arc<dyn FileResolver>) -> Self {
        Self {
            resolver,
            cache: OnceCell::new(),
        }
    }

    /// レジストリを取得（キャッシュ済みなら再取得しない）
    pub async fn load(&self) -> Result<&Registry> {
        self.cache.get_or_try_init(|| self.fetch()).await
    }

    async fn fetch(&self) -> Result<Registry> {
        let location = format!(
            "{}/{}",
            self.resolver.location().trim_end_matches('/'),
            MANIFEST_FILE
        );
        tracing::info!(location = %location, "loading registry");

        let content = self
            .resolver
            .read_file(MANIFEST_FILE)
            .await
            .map_err(|e| KitError::RegistryUnavailable {
                location: location.clone(),
                reason: e.to_string(),
            })?;

        let registry =
            Registry::from_json(&content).map_err(|e| KitError::RegistryUnavailable {
                location: location.clone(),
                reason: format!("invalid registry document: {}", e),
            })?;

        tracing::debug!(
            components = registry.components.len(),
            libs = registry.lib.len(),
            "registry loaded"
        );
        Ok(registry)
    }
}
