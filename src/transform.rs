//! インポート文の書き換え
//!
//! レジストリ由来のソースは `@kit/...` のようなパッケージ名前空間を import している。
//! プロジェクトへ配置する際にそれをプロジェクトのパスエイリアスへ置き換える。

pub mod case;
mod rewrite;
mod rules;
mod scan;

pub use rewrite::Rewriter;
pub use rules::{build_rules, ImportRule, RuleAction, LIB_PACKAGES};
pub use scan::{scan_imports, ImportScan};
