use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{add, info, init, list, search};
use crate::config::RegistrySettings;

const ADD_HELP: &str = "\
RESOLUTION:
  Names are matched against component names and titles (case-insensitive,
  hyphens ignored), then against aliases such as 'dropdown' or 'checkbox'.
  Registry dependencies and library modules are installed as well.

REGISTRY:
  A local registry is used when <registry-dir>/registry.json exists,
  otherwise files are fetched from --registry-url.";

const LIST_HELP: &str = "\
OUTPUT FORMATS:
  (default)  Table of name, title, category and registry dependencies
  --json     JSON array of component summaries";

const INFO_HELP: &str = "\
OUTPUT FORMATS:
  -f table   Tables for the entry, its files and its dependency closure
  -f json    JSON document
  -f yaml    YAML document";

#[derive(Debug, Parser)]
#[command(name = "kitctl", version)]
#[command(about = "Copy-and-own UI component installer", long_about = None)]
pub struct Cli {
    /// リモートレジストリのベースURL（KITCTL_REGISTRY_URL でも指定可）
    #[arg(long, global = true, value_name = "URL")]
    pub registry_url: Option<String>,

    /// ローカルレジストリのディレクトリ（KITCTL_REGISTRY_DIR でも指定可）
    #[arg(long, global = true, value_name = "DIR")]
    pub registry_dir: Option<PathBuf>,

    /// 詳細なログとエラー情報を表示
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// 引数・環境変数・デフォルトからレジストリ設定を解決
    pub fn registry_settings(&self) -> RegistrySettings {
        RegistrySettings::resolve(self.registry_url.as_deref(), self.registry_dir.as_deref())
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add components and their dependencies to the project
    #[command(after_help = ADD_HELP)]
    Add(add::Args),

    /// List registry components
    #[command(after_help = LIST_HELP)]
    List(list::Args),

    /// Show component details and its dependency closure
    #[command(after_help = INFO_HELP)]
    Info(info::Args),

    /// Search components by name, title or description
    Search(search::Args),

    /// Create kit.json in the project
    Init(init::Args),
}
