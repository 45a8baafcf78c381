//! コンポーネントカタログ
//!
//! 一覧・検索のユースケース。

use crate::registry::{ComponentEntry, Registry};
use serde::Serialize;

/// 一覧表示用のサマリ（DTO）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub name: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub registry_dependencies: Vec<String>,
}

impl From<&ComponentEntry> for ComponentSummary {
    fn from(entry: &ComponentEntry) -> Self {
        Self {
            name: entry.name.clone(),
            title: entry.title.clone(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            registry_dependencies: entry.registry_dependencies.clone(),
        }
    }
}

/// コンポーネント一覧（レジストリ順）
///
/// `category` はカテゴリ名・タイトルのどちらでも指定できる。
pub fn list_components(registry: &Registry, category: Option<&str>) -> Vec<ComponentSummary> {
    let wanted = category.map(|c| canonical_category(registry, c));

    registry
        .components
        .iter()
        .filter(|c| match &wanted {
            Some(name) => c.category.eq_ignore_ascii_case(name),
            None => true,
        })
        .map(ComponentSummary::from)
        .collect()
}

fn canonical_category(registry: &Registry, query: &str) -> String {
    registry
        .categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(query) || c.title.eq_ignore_ascii_case(query))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| query.to_string())
}

/// 名前・タイトル・説明の部分一致検索
pub fn search_components(registry: &Registry, query: &str, limit: usize) -> Vec<ComponentSummary> {
    crate::registry::suggest(query, registry, limit)
        .into_iter()
        .map(ComponentSummary::from)
        .collect()
}
