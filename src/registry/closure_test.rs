use super::*;
use crate::registry::model::LibModule;

fn component(name: &str, libs: &[&str], packages: &[&str], deps: &[&str]) -> ComponentEntry {
    ComponentEntry {
        name: name.to_string(),
        title: String::new(),
        description: String::new(),
        category: String::new(),
        files: vec![],
        dependencies: packages.iter().map(|s| s.to_string()).collect(),
        internal_dependencies: libs.iter().map(|s| s.to_string()).collect(),
        registry_dependencies: deps.iter().map(|s| s.to_string()).collect(),
    }
}

fn lib(name: &str, deps: &[&str]) -> LibModule {
    LibModule {
        name: name.to_string(),
        description: String::new(),
        files: vec![],
        path: Some(format!("lib/{}.ts", name)),
        target: None,
        internal_dependencies: deps.iter().map(|s| s.to_string()).collect(),
    }
}

fn registry(components: Vec<ComponentEntry>) -> Registry {
    Registry {
        components,
        ..Registry::default()
    }
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_leaf_component_is_itself_plus_direct_deps() {
    let leaf = component("boolean", &["utils", "types"], &["clsx"], &[]);
    let registry = registry(vec![leaf.clone()]);

    let closure = resolve_closure(&leaf, &registry, &mut HashSet::new());

    assert_eq!(closure.components, set(&["boolean"]));
    assert_eq!(closure.libs, set(&["utils", "types"]));
    assert_eq!(closure.packages, set(&["clsx"]));
}

#[test]
fn test_scenario_transitive_component_and_package() {
    let a = component("A", &["util-x"], &[], &["B"]);
    let b = component("B", &[], &["left-pad"], &[]);
    let registry = registry(vec![a.clone(), b]);

    let closure = resolve_closure(&a, &registry, &mut HashSet::new());

    assert_eq!(closure.components, set(&["A", "B"]));
    assert_eq!(closure.libs, set(&["util-x"]));
    assert_eq!(closure.packages, set(&["left-pad"]));
}

#[test]
fn test_cycle_terminates() {
    let a = component("A", &[], &[], &["B"]);
    let b = component("B", &[], &[], &["A"]);
    let registry = registry(vec![a.clone(), b]);

    let mut visited = HashSet::new();
    let closure = resolve_closure(&a, &registry, &mut visited);

    assert_eq!(closure.components, set(&["A", "B"]));
    assert_eq!(visited.len(), 2);
}

#[test]
fn test_self_dependency_contributes_nothing_extra() {
    let a = component("A", &["utils"], &["clsx"], &["A"]);
    let registry = registry(vec![a.clone()]);

    let closure = resolve_closure(&a, &registry, &mut HashSet::new());

    assert_eq!(closure.components, set(&["A"]));
    assert_eq!(closure.libs, set(&["utils"]));
    assert_eq!(closure.packages, set(&["clsx"]));
}

#[test]
fn test_already_visited_returns_empty() {
    let a = component("A", &["utils"], &[], &[]);
    let registry = registry(vec![a.clone()]);

    let mut visited = HashSet::new();
    visited.insert("a".to_string());

    assert!(resolve_closure(&a, &registry, &mut visited).is_empty());
}

#[test]
fn test_unknown_registry_dependency_is_skipped() {
    let a = component("A", &[], &[], &["ghost", "B"]);
    let b = component("B", &[], &[], &[]);
    let registry = registry(vec![a.clone(), b]);

    let closure = resolve_closure(&a, &registry, &mut HashSet::new());

    assert_eq!(closure.components, set(&["A", "B"]));
}

#[test]
fn test_registry_dependency_lookup_is_case_insensitive() {
    let a = component("form", &[], &[], &["Text-Input"]);
    let b = component("text-input", &[], &["react-hook-form"], &[]);
    let registry = registry(vec![a.clone(), b]);

    let closure = resolve_closure(&a, &registry, &mut HashSet::new());

    assert_eq!(closure.components, set(&["form", "text-input"]));
    assert_eq!(closure.packages, set(&["react-hook-form"]));
}

#[test]
fn test_diamond_dependency_visited_once() {
    let top = component("top", &[], &[], &["left", "right"]);
    let left = component("left", &[], &[], &["shared"]);
    let right = component("right", &[], &[], &["shared"]);
    let shared = component("shared", &["utils"], &["clsx"], &[]);
    let registry = registry(vec![top.clone(), left, right, shared]);

    let mut visited = HashSet::new();
    let closure = resolve_closure(&top, &registry, &mut visited);

    assert_eq!(closure.components, set(&["top", "left", "right", "shared"]));
    assert_eq!(visited.len(), 4);
}

#[test]
fn test_resolve_many_counts_shared_dependency_once() {
    let c = component("C", &["L"], &[], &["shared"]);
    let d = component("D", &["L"], &[], &["shared"]);
    let shared = component("shared", &[], &["clsx"], &[]);
    let registry = registry(vec![c.clone(), d.clone(), shared]);

    let closure = resolve_many([&c, &d], &registry);

    assert_eq!(closure.components, set(&["C", "D", "shared"]));
    assert_eq!(closure.libs, set(&["L"]));
    assert_eq!(closure.packages, set(&["clsx"]));
}

#[test]
fn test_resolve_many_of_dependency_and_dependent() {
    let a = component("A", &[], &[], &["B"]);
    let b = component("B", &[], &["left-pad"], &[]);
    let registry = registry(vec![a.clone(), b.clone()]);

    // B を先に解決しても A 側から再訪問しない
    let closure = resolve_many([&b, &a], &registry);

    assert_eq!(closure.components, set(&["A", "B"]));
    assert_eq!(closure.packages, set(&["left-pad"]));
}

#[test]
fn test_expand_libs_follows_internal_dependencies() {
    let mut registry = registry(vec![]);
    registry.lib.insert("hooks".to_string(), lib("hooks", &["types", "utils"]));
    registry.lib.insert("types".to_string(), lib("types", &[]));
    registry.lib.insert("utils".to_string(), lib("utils", &["types"]));

    let libs = expand_libs(&set(&["hooks"]), &registry);

    assert_eq!(libs, set(&["hooks", "types", "utils"]));
}

#[test]
fn test_expand_libs_cycle_and_unknown() {
    let mut registry = registry(vec![]);
    registry.lib.insert("a".to_string(), lib("a", &["b"]));
    registry.lib.insert("b".to_string(), lib("b", &["a", "missing"]));

    let libs = expand_libs(&set(&["a", "ghost"]), &registry);

    assert_eq!(libs, set(&["a", "b"]));
}

#[test]
fn test_expand_libs_is_case_insensitive() {
    let mut registry = registry(vec![]);
    registry.lib.insert("form".to_string(), lib("form", &["Utils"]));
    registry.lib.insert("utils".to_string(), lib("utils", &[]));

    let libs = expand_libs(&set(&["Form"]), &registry);

    // 結果はマップのキーで揃える
    assert_eq!(libs, set(&["form", "utils"]));
}
