//! コンポーネント名の解決
//!
//! 解決順序（最初に一致したものを採用）:
//! 1. name / title の完全一致（大文字小文字無視）
//! 2. ハイフン除去 + 小文字化した正規化一致
//! 3. 別名テーブル経由（別名の値を 1, 2 で再解決）

use super::model::{ComponentEntry, Registry};
use crate::error::{KitError, Result};
use std::collections::BTreeMap;

/// 見つからなかった場合に提示する候補数
pub const SUGGESTION_LIMIT: usize = 5;

/// 組み込みの別名
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("dropdown", "select-dropdown"),
    ("checkbox", "boolean"),
    ("toggle", "boolean"),
    ("switch", "boolean"),
    ("textarea", "text-area"),
    ("input", "text-input"),
    ("date", "date-picker"),
    ("radio", "radio-group"),
    ("upload", "file-upload"),
    ("number", "number-input"),
];

/// 別名テーブル（正規化済みキー → 正式名）
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// 組み込み別名のみ
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (alias, canonical) in BUILTIN_ALIASES {
            table.insert(alias, canonical);
        }
        table
    }

    /// 組み込み別名にレジストリ提供の別名を重ねる（レジストリ優先）
    pub fn for_registry(registry: &Registry) -> Self {
        let mut table = Self::builtin();
        for (alias, canonical) in &registry.aliases {
            table.insert(alias, canonical);
        }
        table
    }

    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.entries
            .insert(normalize(alias), canonical.to_string());
    }

    /// 正規化したクエリで別名を引く
    pub fn get(&self, query: &str) -> Option<&str> {
        self.entries.get(&normalize(query)).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// ハイフンを除去して小文字化
pub fn normalize(value: &str) -> String {
    value.replace('-', "").to_lowercase()
}

/// 名前・タイトル・別名でコンポーネントを探す
pub fn find<'r>(
    query: &str,
    registry: &'r Registry,
    aliases: &AliasTable,
) -> Option<&'r ComponentEntry> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(entry) = find_direct(query, registry) {
        return Some(entry);
    }

    let canonical = aliases.get(query)?;
    tracing::debug!(query, canonical, "resolved component alias");
    find_direct(canonical, registry)
}

fn find_direct<'r>(query: &str, registry: &'r Registry) -> Option<&'r ComponentEntry> {
    let exact = registry.components.iter().find(|c| {
        c.name.eq_ignore_ascii_case(query) || c.title.eq_ignore_ascii_case(query)
    });
    if exact.is_some() {
        return exact;
    }

    let normalized = normalize(query);
    registry
        .components
        .iter()
        .find(|c| normalize(&c.name) == normalized || normalize(&c.title) == normalized)
}

/// 部分一致の候補（レジストリ順、最大 `limit` 件）
pub fn suggest<'r>(query: &str, registry: &'r Registry, limit: usize) -> Vec<&'r ComponentEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    registry
        .components
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.title.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}

/// 見つからなければ候補付きの ComponentNotFound を返す
pub fn locate<'r>(
    query: &str,
    registry: &'r Registry,
    aliases: &AliasTable,
) -> Result<&'r ComponentEntry> {
    find(query, registry, aliases).ok_or_else(|| KitError::ComponentNotFound {
        name: query.to_string(),
        suggestions: suggest(query, registry, SUGGESTION_LIMIT)
            .into_iter()
            .map(|c| c.name.clone())
            .collect(),
    })
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod tests;
