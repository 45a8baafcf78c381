//! ローカルディスク上のレジストリ

use super::{BackendKind, FileResolver};
use crate::error::{KitError, Result};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

/// ローカルレジストリ
pub struct LocalResolver {
    root: PathBuf,
}

impl LocalResolver {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl FileResolver for LocalResolver {
    fn read_file<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let full = self.full_path(path);
            match tokio::fs::read_to_string(&full).await {
                Ok(content) => Ok(content),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Err(KitError::SourceFileNotFound(full))
                }
                Err(e) => Err(KitError::Io(e)),
            }
        })
    }

    fn file_exists<'a>(&'a self, path: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move { tokio::fs::metadata(self.full_path(path)).await.is_ok() })
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
