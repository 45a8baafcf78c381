use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

/// ソース中で参照されている名前空間のサブパッケージ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportScan {
    pub packages: BTreeSet<String>,
}

impl ImportScan {
    pub fn has_namespace_imports(&self) -> bool {
        !self.packages.is_empty()
    }

    #[cfg(test)]
    pub fn references(&self, package: &str) -> bool {
        self.packages.contains(package)
    }
}

/// `namespace` からの import を走査する（書き換えとは独立）
///
/// 静的 import・副作用 import・動的 `import()` を対象にする。
pub fn scan_imports(source: &str, namespace: &str) -> ImportScan {
    let pattern = format!(
        r#"(?:\bfrom\s+|\bimport\s+|\bimport\s*\(\s*)['"]{}/([A-Za-z0-9_-]+)"#,
        regex::escape(namespace.trim_end_matches('/'))
    );
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(namespace, error = %e, "cannot build import scanner");
            return ImportScan::default();
        }
    };

    let packages = re
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    ImportScan { packages }
}
