//! テスト用モックファイルシステム

use super::*;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, Vec<u8>>>,
    dirs: RwLock<HashSet<String>>,
    failing: RwLock<HashSet<String>>,
    writes: RwLock<Vec<String>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            dirs: RwLock::new(HashSet::new()),
            failing: RwLock::new(HashSet::new()),
            writes: RwLock::new(Vec::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), content.as_bytes().to_vec());
    }

    /// 指定パスへの書き込みを失敗させる
    pub fn fail_writes_to(&self, path: &str) {
        self.failing.write().unwrap().insert(path.to_string());
    }

    /// 書き込みが行われたパス（書き込み順）
    pub fn written_paths(&self) -> Vec<String> {
        self.writes.read().unwrap().clone()
    }

    /// ファイル内容を取得
    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .map(|c| String::from_utf8_lossy(c).to_string())
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        let key = key(path);
        self.files.read().unwrap().contains_key(&key) || self.dirs.read().unwrap().contains(&key)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.dirs.write().unwrap().insert(key(path));
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.content(&key(path)).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into()
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        let key = key(path);
        if self.failing.read().unwrap().contains(&key) {
            return Err(
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied")
                    .into(),
            );
        }
        self.files.write().unwrap().insert(key.clone(), content.to_vec());
        self.writes.write().unwrap().push(key);
        Ok(())
    }
}
