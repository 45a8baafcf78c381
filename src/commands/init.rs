//! kitctl init コマンド
//!
//! プロジェクトルートに kit.json を作成する。

use crate::error::{KitError, Result};
use crate::project::{ProjectConfig, DEFAULT_NAMESPACE, PROJECT_CONFIG_FILE};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// プロジェクトルート
    #[arg(long, default_value = ".")]
    pub cwd: PathBuf,

    /// UI コンポーネントのパスエイリアス
    #[arg(long, default_value = "@/components")]
    pub components_alias: String,

    /// 共有ライブラリのパスエイリアス
    #[arg(long, default_value = "@/lib")]
    pub lib_alias: String,

    /// ファイルを src/ 配下に置く
    #[arg(long)]
    pub src_dir: bool,

    /// JavaScript プロジェクト
    #[arg(long)]
    pub javascript: bool,

    /// 既存の kit.json を上書き
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: Args) -> Result<()> {
    let path = args.cwd.join(PROJECT_CONFIG_FILE);
    if path.exists() && !args.force {
        return Err(KitError::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let config = ProjectConfig {
        components_alias: args.components_alias,
        lib_alias: args.lib_alias,
        use_type_script: !args.javascript,
        use_src_dir: args.src_dir,
        namespace: DEFAULT_NAMESPACE.to_string(),
    };
    let written = config.save(&args.cwd)?;

    println!("{} Created {}", "✓".green(), written.display());
    Ok(())
}
