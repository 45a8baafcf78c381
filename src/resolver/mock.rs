//! テスト用インメモリレジストリ

use super::*;
use crate::error::KitError;
use std::collections::HashMap;
use std::sync::Mutex;

/// メモリ上のファイルを返すレジストリ
///
/// 読み出し回数を記録する。`fail` で登録したパスは取得失敗になる。
#[derive(Default)]
pub struct MockResolver {
    files: Mutex<HashMap<String, String>>,
    failing: Mutex<HashMap<String, u16>>,
    reads: Mutex<Vec<String>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        self
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.failing.lock().unwrap().insert(path.to_string(), status);
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    pub fn read_count(&self, path: &str) -> usize {
        self.reads.lock().unwrap().iter().filter(|p| *p == path).count()
    }
}

impl FileResolver for MockResolver {
    fn read_file<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.reads.lock().unwrap().push(path.to_string());
            let url = format!("mock://registry/{}", path);
            if let Some(status) = self.failing.lock().unwrap().get(path) {
                return Err(KitError::fetch_status(url, *status));
            }
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| KitError::fetch_status(url, 404))
        })
    }

    fn file_exists<'a>(&'a self, path: &'a str) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move { self.files.lock().unwrap().contains_key(path) })
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    fn location(&self) -> String {
        "mock://registry".to_string()
    }
}
