//! 利用者プロジェクトの設定（kit.json）

use crate::error::{KitError, Result};
use crate::fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// プロジェクト設定ファイル名
pub const PROJECT_CONFIG_FILE: &str = "kit.json";

/// 書き換え対象のパッケージ名前空間
pub const DEFAULT_NAMESPACE: &str = "@kit";

fn default_components_alias() -> String {
    "@/components".to_string()
}

fn default_lib_alias() -> String {
    "@/lib".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_true() -> bool {
    true
}

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// UI コンポーネントのパスエイリアス
    #[serde(default = "default_components_alias")]
    pub components_alias: String,
    /// 共有ライブラリのパスエイリアス
    #[serde(default = "default_lib_alias")]
    pub lib_alias: String,
    #[serde(default = "default_true")]
    pub use_type_script: bool,
    /// ファイルを src/ 配下に置くか
    #[serde(default)]
    pub use_src_dir: bool,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            components_alias: default_components_alias(),
            lib_alias: default_lib_alias(),
            use_type_script: true,
            use_src_dir: false,
            namespace: default_namespace(),
        }
    }
}

impl ProjectConfig {
    /// kit.json を読み込む（存在しなければデフォルト）
    pub fn load(fs: &dyn FileSystem, root: &Path) -> Result<Self> {
        let path = root.join(PROJECT_CONFIG_FILE);
        if !fs.exists(&path) {
            tracing::info!(path = %path.display(), "no project config, using defaults");
            return Ok(Self::default());
        }

        let content = fs.read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| KitError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 値の妥当性チェック
    pub fn validate(&self) -> Result<()> {
        if self.components_alias.trim().is_empty() {
            return Err(KitError::Config("componentsAlias must not be empty".to_string()));
        }
        if self.lib_alias.trim().is_empty() {
            return Err(KitError::Config("libAlias must not be empty".to_string()));
        }
        if !self.namespace.starts_with('@') || self.namespace.contains('/') {
            return Err(KitError::Config(format!(
                "namespace must look like '@scope', got '{}'",
                self.namespace
            )));
        }
        Ok(())
    }

    /// kit.json をアトミックに保存
    pub fn save(&self, root: &Path) -> Result<PathBuf> {
        self.validate()?;
        std::fs::create_dir_all(root)?;

        let path = root.join(PROJECT_CONFIG_FILE);
        let mut temp_file = NamedTempFile::new_in(root)?;
        let content = serde_json::to_string_pretty(self)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.write_all(b"\n")?;
        temp_file.persist(&path).map_err(|e| KitError::Io(e.error))?;

        Ok(path)
    }

    /// マニフェストの target をプロジェクト内の絶対パスに変換
    ///
    /// 絶対パスや `..` を含む target はプロジェクト外を指しうるので拒否する。
    pub fn target_path(&self, root: &Path, target: &str) -> Result<PathBuf> {
        let relative = Path::new(target);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !safe || target.trim().is_empty() {
            return Err(KitError::UnsafeTarget(target.to_string()));
        }

        if self.use_src_dir && !relative.starts_with("src") {
            Ok(root.join("src").join(relative))
        } else {
            Ok(root.join(relative))
        }
    }
}

/// パッケージマネージャ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// ロックファイルから推定（なければ npm）
    pub fn detect(fs: &dyn FileSystem, root: &Path) -> Self {
        const LOCKFILES: [(&str, PackageManager); 3] = [
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("bun.lockb", PackageManager::Bun),
        ];

        LOCKFILES
            .iter()
            .find(|(file, _)| fs.exists(&root.join(file)))
            .map(|(_, pm)| *pm)
            .unwrap_or(PackageManager::Npm)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// パッケージ追加コマンド
    pub fn install_command(&self, specs: &[String]) -> String {
        let verb = match self {
            PackageManager::Npm => "install",
            _ => "add",
        };
        format!("{} {} {}", self.as_str(), verb, specs.join(" "))
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
