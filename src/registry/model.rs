//! registry.json のスキーマ

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ファイル対応（レジストリ内パス → プロジェクト内パス）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMapping {
    /// レジストリルートからの相対パス
    pub source: String,
    /// プロジェクトルートからの相対パス
    pub target: String,
}

/// コンポーネントエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub files: Vec<FileMapping>,
    /// 外部パッケージ（npm）
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// ライブラリモジュール名
    #[serde(default)]
    pub internal_dependencies: Vec<String>,
    /// 他コンポーネント名
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
}

/// 共有ライブラリモジュール
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibModule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<FileMapping>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub internal_dependencies: Vec<String>,
}

impl LibModule {
    /// インストール対象のファイル対応
    ///
    /// `files` があればそれを、なければ `path`/`target` から1件組み立てる。
    /// `target` 省略時は `lib/<ファイル名>`。
    pub fn file_mappings(&self) -> Vec<FileMapping> {
        if !self.files.is_empty() {
            return self.files.clone();
        }

        let Some(path) = self.path.as_deref() else {
            return Vec::new();
        };

        let target = self.target.clone().unwrap_or_else(|| {
            let file_name = path.rsplit('/').next().unwrap_or(path);
            format!("lib/{}", file_name)
        });

        vec![FileMapping {
            source: path.to_string(),
            target,
        }]
    }
}

/// カテゴリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// レジストリのメタ情報
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryMeta {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// レジストリ本体
///
/// ロード後は不変。ツールがレジストリを書き換えることはない。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
    #[serde(default)]
    pub lib: BTreeMap<String, LibModule>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// パッケージ名 → バージョン範囲
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    /// 別名 → 正式名
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub meta: Option<RegistryMeta>,
}

impl Registry {
    /// JSON文字列からパース
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// 名前（大文字小文字無視）でコンポーネントを取得
    pub fn component(&self, name: &str) -> Option<&ComponentEntry> {
        self.components
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// ライブラリモジュールをマップのキーと共に取得（大文字小文字無視）
    ///
    /// マップのキーを優先し、なければ `name` フィールドで探す。
    pub fn lib_entry(&self, name: &str) -> Option<(&str, &LibModule)> {
        self.lib
            .get_key_value(name)
            .or_else(|| {
                self.lib
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
            })
            .or_else(|| {
                self.lib
                    .iter()
                    .find(|(_, m)| m.name.eq_ignore_ascii_case(name))
            })
            .map(|(key, module)| (key.as_str(), module))
    }

    /// ライブラリモジュールを取得
    pub fn lib_module(&self, name: &str) -> Option<&LibModule> {
        self.lib_entry(name).map(|(_, module)| module)
    }

    /// パッケージの install 指定（バージョン範囲が分かれば付与）
    pub fn package_spec(&self, package: &str) -> String {
        match self.dependencies.get(package) {
            Some(range) if !range.is_empty() => format!("{}@{}", package, range),
            _ => package.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
