//! コンポーネントレジストリ
//!
//! registry.json のスキーマ、ロード、名前解決、依存閉包を扱う。

pub mod closure;
pub mod loader;
pub mod locator;
pub mod model;

pub use closure::{expand_libs, resolve_closure, resolve_many, Closure};
pub use loader::RegistryLoader;
pub use locator::{locate, suggest, AliasTable};
pub use model::{Category, ComponentEntry, FileMapping, LibModule, Registry};
