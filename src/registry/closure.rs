//! 依存関係の推移閉包
//!
//! 訪問済み集合を再帰全体で共有するため、循環しても停止し、
//! ひし形依存は一度だけ数えられる。

use super::model::{ComponentEntry, Registry};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// 閉包の結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Closure {
    /// コンポーネント名
    pub components: BTreeSet<String>,
    /// ライブラリモジュール名
    pub libs: BTreeSet<String>,
    /// 外部パッケージ名
    pub packages: BTreeSet<String>,
}

impl Closure {
    /// 別の閉包を取り込む
    pub fn merge(&mut self, other: Closure) {
        self.components.extend(other.components);
        self.libs.extend(other.libs);
        self.packages.extend(other.packages);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.libs.is_empty() && self.packages.is_empty()
    }
}

/// 1コンポーネントの閉包を計算
///
/// `visited` は呼び出し木全体で共有する。訪問済みなら空を返す。
/// 存在しない registryDependencies は黙ってスキップする。
pub fn resolve_closure(
    component: &ComponentEntry,
    registry: &Registry,
    visited: &mut HashSet<String>,
) -> Closure {
    if !visited.insert(component.name.to_lowercase()) {
        return Closure::default();
    }

    let mut closure = Closure::default();
    closure.components.insert(component.name.clone());
    closure
        .libs
        .extend(component.internal_dependencies.iter().cloned());
    closure
        .packages
        .extend(component.dependencies.iter().cloned());

    for dependency in &component.registry_dependencies {
        match registry.component(dependency) {
            Some(entry) => closure.merge(resolve_closure(entry, registry, visited)),
            None => tracing::debug!(
                component = %component.name,
                dependency = %dependency,
                "skipping unknown registry dependency"
            ),
        }
    }

    closure
}

/// 複数コンポーネントをまとめてインストールする際の閉包
///
/// 訪問済み集合を共有するので、共通依存は一度だけ含まれる。
pub fn resolve_many<'r, I>(components: I, registry: &Registry) -> Closure
where
    I: IntoIterator<Item = &'r ComponentEntry>,
{
    let mut visited = HashSet::new();
    let mut closure = Closure::default();

    for component in components {
        closure.merge(resolve_closure(component, registry, &mut visited));
    }

    closure
}

/// ライブラリモジュールを internalDependencies で閉じる
///
/// レジストリに存在しないモジュール名は結果から除外する。
pub fn expand_libs<'a, I>(libs: I, registry: &Registry) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut visited = HashSet::new();
    let mut result = BTreeSet::new();
    let mut stack: Vec<String> = libs.into_iter().cloned().collect();

    while let Some(name) = stack.pop() {
        if !visited.insert(name.clone()) {
            continue;
        }

        let Some((key, module)) = registry.lib_entry(&name) else {
            tracing::warn!(lib = %name, "library module is not in the registry");
            continue;
        };

        result.insert(key.to_string());
        stack.extend(module.internal_dependencies.iter().cloned());
    }

    result
}

#[cfg(test)]
#[path = "closure_test.rs"]
mod tests;
