//! コンポーネント詳細
//!
//! info コマンド向けに、エントリ本体と依存閉包をまとめた DTO を組み立てる。

use crate::error::Result;
use crate::registry::{
    expand_libs, locate, resolve_many, AliasTable, Closure, FileMapping, Registry,
};
use crate::transform::case::to_pascal_case;
use serde::Serialize;
use std::collections::BTreeSet;

/// コンポーネント詳細（DTO）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetail {
    pub name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// 公開されるコンポーネント名（PascalCase）
    pub export_name: String,
    pub files: Vec<FileMapping>,
    pub registry_dependencies: Vec<String>,
    /// 依存閉包
    pub closure: Closure,
    /// internalDependencies まで閉じたライブラリモジュール
    pub libs: BTreeSet<String>,
    /// バージョン範囲付きのパッケージ指定
    pub packages: Vec<String>,
}

/// 名前・タイトル・別名からコンポーネント詳細を取得
pub fn describe_component(
    registry: &Registry,
    aliases: &AliasTable,
    query: &str,
) -> Result<ComponentDetail> {
    let entry = locate(query, registry, aliases)?;
    let closure = resolve_many([entry], registry);
    let libs = expand_libs(&closure.libs, registry);
    let packages = closure
        .packages
        .iter()
        .map(|p| registry.package_spec(p))
        .collect();

    Ok(ComponentDetail {
        name: entry.name.clone(),
        title: entry.title.clone(),
        description: entry.description.clone(),
        category: entry.category.clone(),
        export_name: to_pascal_case(&entry.name),
        files: entry.files.clone(),
        registry_dependencies: entry.registry_dependencies.clone(),
        closure,
        libs,
        packages,
    })
}
