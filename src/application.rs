//! アプリケーション層
//!
//! ユースケースを提供する。

mod catalog;
mod component_info;
mod install;
mod session;

pub use catalog::{list_components, search_components, ComponentSummary};
pub use component_info::{describe_component, ComponentDetail};
pub use install::{
    install_components, FileAction, FileOutcome, FileOwner, InstallOptions, InstallReport,
};
pub use session::Session;
