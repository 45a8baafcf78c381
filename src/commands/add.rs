//! kitctl add コマンド
//!
//! コンポーネントと依存をプロジェクトへコピーし、import をエイリアスへ書き換える。

use crate::application::{install_components, FileAction, InstallOptions, InstallReport, Session};
use crate::config::RegistrySettings;
use crate::error::{ErrorFormatter, KitError, Result};
use crate::fs::RealFs;
use crate::output::CommandSummary;
use crate::project::{PackageManager, ProjectConfig};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// コンポーネント名（名前・タイトル・別名）
    #[arg(required = true)]
    pub names: Vec<String>,

    /// プロジェクトルート
    #[arg(long, default_value = ".")]
    pub cwd: PathBuf,

    /// 既存ファイルを上書き
    #[arg(long)]
    pub overwrite: bool,

    /// 書き込まずに結果だけ表示
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: Args, settings: &RegistrySettings) -> Result<()> {
    let fs = RealFs;
    let config = ProjectConfig::load(&fs, &args.cwd)?;

    let session = Session::open(settings);
    tracing::debug!(backend = %session.backend(), "session opened");
    let registry = session.registry().await?;

    let options = InstallOptions {
        overwrite: args.overwrite,
        dry_run: args.dry_run,
        show_progress: std::io::stderr().is_terminal(),
    };
    let report = install_components(
        registry,
        session.resolver(),
        &fs,
        &args.cwd,
        &config,
        &args.names,
        &options,
    )
    .await?;

    print_not_found(&report);
    print_files(&report, &args.cwd);
    if !report.fetch_aborted {
        print_packages(&report, PackageManager::detect(&fs, &args.cwd));
    }
    CommandSummary::for_install(&report).print();

    let not_found = report.not_found.len();
    let failed = report.count(FileAction::Failed);
    if not_found + failed == 0 {
        return Ok(());
    }
    Err(KitError::InstallIncomplete { not_found, failed })
}

fn print_not_found(report: &InstallReport) {
    let formatter = ErrorFormatter::new(false);
    for error in &report.not_found {
        eprintln!("{}", formatter.format(error));
    }
}

fn print_files(report: &InstallReport, root: &Path) {
    if report.files.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Action", "Component", "Path"]);

    for file in &report.files {
        let path = file
            .dest
            .as_deref()
            .map(|dest| dest.strip_prefix(root).unwrap_or(dest).display().to_string())
            .unwrap_or_else(|| file.target.clone());
        table.add_row(vec![file.action.as_str().to_string(), file.owner.to_string(), path]);
    }

    println!("{table}");

    let failures: Vec<_> = report
        .files
        .iter()
        .filter(|f| f.action == FileAction::Failed)
        .filter_map(|f| f.error.as_ref().map(|e| (f, e)))
        .collect();
    for (file, error) in failures {
        eprintln!("  {}: {}", file.target, error);
    }
}

fn print_packages(report: &InstallReport, package_manager: PackageManager) {
    if report.packages.is_empty() {
        return;
    }

    println!();
    println!("Install the required packages:");
    println!("  {}", package_manager.install_command(&report.packages));
    println!();
}
