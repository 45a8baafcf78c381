//! コマンド実行単位のセッション
//!
//! バックエンドの選択とレジストリのキャッシュを1回の実行に閉じ込める。

use crate::config::{HttpConfig, RegistrySettings};
use crate::error::Result;
use crate::http::ReqwestHttp;
use crate::registry::{AliasTable, Registry, RegistryLoader};
use crate::resolver::{select_resolver, BackendKind, FileResolver};
use std::sync::Arc;

pub struct Session {
    resolver: Arc<dyn FileResolver>,
    loader: RegistryLoader,
}

impl Session {
    /// 設定からバックエンドを一度だけ選んでセッションを開く
    pub fn open(settings: &RegistrySettings) -> Self {
        let http = Arc::new(ReqwestHttp::new(&HttpConfig::default()));
        Self::with_resolver(select_resolver(settings, http))
    }

    pub fn with_resolver(resolver: Arc<dyn FileResolver>) -> Self {
        let loader = RegistryLoader::new(Arc::clone(&resolver));
        Self { resolver, loader }
    }

    pub fn resolver(&self) -> &dyn FileResolver {
        self.resolver.as_ref()
    }

    pub fn backend(&self) -> BackendKind {
        self.resolver.kind()
    }

    /// レジストリ（初回のみ読み込み）
    pub async fn registry(&self) -> Result<&Registry> {
        self.loader.load().await
    }

    /// 組み込み別名とレジストリ提供の別名をマージした表
    pub async fn aliases(&self) -> Result<AliasTable> {
        Ok(AliasTable::for_registry(self.registry().await?))
    }
}
