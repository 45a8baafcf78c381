//! add ユースケース
//!
//! 名前解決 → 依存閉包 → 一括取得 → import 書き換え → 書き込み の順に進める。
//! 取得はすべて並行に行い、1件でも失敗したら何も書き込まない。
//! 書き込みは逐次で、途中で失敗しても書き込み済みのファイルは残る。

use crate::error::{KitError, Result};
use crate::fs::FileSystem;
use crate::project::ProjectConfig;
use crate::registry::{
    expand_libs, locate, resolve_many, AliasTable, Closure, ComponentEntry, FileMapping,
    Registry,
};
use crate::resolver::FileResolver;
use crate::transform::{scan_imports, Rewriter};
use futures_util::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// インストールオプション
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// 既存ファイルを上書きする
    pub overwrite: bool,
    /// 取得・書き換えまで行い、書き込まない
    pub dry_run: bool,
    /// 取得中にプログレスバーを表示する
    pub show_progress: bool,
}

/// ファイルの持ち主
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOwner {
    Component(String),
    Lib(String),
}

impl fmt::Display for FileOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOwner::Component(name) => write!(f, "{}", name),
            FileOwner::Lib(name) => write!(f, "lib:{}", name),
        }
    }
}

/// 取得予定のファイル
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub owner: FileOwner,
    pub source: String,
    pub target: String,
    pub dest: PathBuf,
}

/// ファイルごとの処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Overwrite,
    Skip,
    Failed,
}

impl FileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Create => "Create",
            FileAction::Overwrite => "Overwrite",
            FileAction::Skip => "Skip",
            FileAction::Failed => "Failed",
        }
    }
}

#[derive(Debug)]
pub struct FileOutcome {
    pub owner: FileOwner,
    pub target: String,
    pub dest: Option<PathBuf>,
    pub action: FileAction,
    pub error: Option<KitError>,
}

/// インストール結果
#[derive(Debug, Default)]
pub struct InstallReport {
    /// 解決できた要求コンポーネント名
    pub requested: Vec<String>,
    /// 解決できなかった名前（ComponentNotFound）
    pub not_found: Vec<KitError>,
    pub closure: Closure,
    /// 取り込んだライブラリモジュール（スキャン由来を含む）
    pub libs: BTreeSet<String>,
    /// バージョン範囲付きのパッケージ指定
    pub packages: Vec<String>,
    pub files: Vec<FileOutcome>,
    /// 取得失敗のため書き込みを中止した
    pub fetch_aborted: bool,
    pub dry_run: bool,
}

impl InstallReport {
    pub fn count(&self, action: FileAction) -> usize {
        self.files.iter().filter(|f| f.action == action).count()
    }

    /// 失敗数（未解決の名前を含む）
    pub fn failed_count(&self) -> usize {
        self.not_found.len() + self.count(FileAction::Failed)
    }

    /// 実際に書き込んだファイル数
    pub fn written_count(&self) -> usize {
        if self.dry_run {
            return 0;
        }
        self.count(FileAction::Create) + self.count(FileAction::Overwrite)
    }

    /// 一部だけ書き込まれた状態か
    pub fn is_partial(&self) -> bool {
        self.failed_count() > 0 && self.written_count() > 0
    }
}

/// 取得予定ファイルの組み立て
///
/// 同じ書き込み先は一度だけ扱う。プロジェクト外を指す target はここで拒否する。
struct Planner<'a> {
    root: &'a Path,
    config: &'a ProjectConfig,
    seen: HashSet<PathBuf>,
    pending: Vec<PlannedFile>,
    refused: Vec<FileOutcome>,
}

impl<'a> Planner<'a> {
    fn new(root: &'a Path, config: &'a ProjectConfig) -> Self {
        Self {
            root,
            config,
            seen: HashSet::new(),
            pending: Vec::new(),
            refused: Vec::new(),
        }
    }

    fn add(&mut self, owner: FileOwner, mappings: &[FileMapping]) {
        for mapping in mappings {
            match self.config.target_path(self.root, &mapping.target) {
                Ok(dest) => {
                    if self.seen.insert(dest.clone()) {
                        self.pending.push(PlannedFile {
                            owner: owner.clone(),
                            source: mapping.source.clone(),
                            target: mapping.target.clone(),
                            dest,
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!(owner = %owner, target = %mapping.target, "refusing unsafe target");
                    self.refused.push(FileOutcome {
                        owner: owner.clone(),
                        target: mapping.target.clone(),
                        dest: None,
                        action: FileAction::Failed,
                        error: Some(e),
                    });
                }
            }
        }
    }

    fn add_lib(&mut self, registry: &Registry, name: &str) {
        if let Some(module) = registry.lib_module(name) {
            self.add(FileOwner::Lib(name.to_string()), &module.file_mappings());
        }
    }

    fn take_pending(&mut self) -> Vec<PlannedFile> {
        std::mem::take(&mut self.pending)
    }
}

/// コンポーネントをプロジェクトへインストール
pub async fn install_components(
    registry: &Registry,
    resolver: &dyn FileResolver,
    fs: &dyn FileSystem,
    project_root: &Path,
    config: &ProjectConfig,
    names: &[String],
    options: &InstallOptions,
) -> Result<InstallReport> {
    let rewriter = Rewriter::new(config)?;
    let aliases = AliasTable::for_registry(registry);
    let mut report = InstallReport {
        dry_run: options.dry_run,
        ..InstallReport::default()
    };

    // 1. 名前解決（見つからない名前は記録して続行）
    let mut requested: Vec<&ComponentEntry> = Vec::new();
    for name in names {
        match locate(name, registry, &aliases) {
            Ok(entry) => {
                if !requested.iter().any(|e| e.name == entry.name) {
                    requested.push(entry);
                }
            }
            Err(e) => {
                tracing::warn!(name = %name, "component not found");
                report.not_found.push(e);
            }
        }
    }
    if requested.is_empty() {
        return Ok(report);
    }
    report.requested = requested.iter().map(|e| e.name.clone()).collect();

    // 2. 依存閉包
    let closure = resolve_many(requested.iter().copied(), registry);
    let mut libs = expand_libs(&closure.libs, registry);
    tracing::debug!(
        components = closure.components.len(),
        libs = libs.len(),
        packages = closure.packages.len(),
        "resolved install closure"
    );

    // 3. 取得計画
    let mut planner = Planner::new(project_root, config);
    for name in &closure.components {
        if let Some(entry) = registry.component(name) {
            planner.add(FileOwner::Component(entry.name.clone()), &entry.files);
        }
    }
    for lib in &libs {
        planner.add_lib(registry, lib);
    }

    // 4. 並行取得。取得したソースが参照するサブパッケージのライブラリも追加で取得する
    let mut fetched = fetch_all(resolver, planner.take_pending(), options.show_progress).await;
    let mut scanned = 0;
    loop {
        let referenced: BTreeSet<String> = fetched[scanned..]
            .iter()
            .filter_map(|(_, result)| result.as_ref().ok())
            .flat_map(|source| scan_imports(source, &config.namespace).packages)
            .filter(|pkg| registry.lib_module(pkg).is_some() && !libs.contains(pkg))
            .collect();
        scanned = fetched.len();

        let extra: BTreeSet<String> = expand_libs(&referenced, registry)
            .into_iter()
            .filter(|lib| !libs.contains(lib))
            .collect();
        if extra.is_empty() {
            break;
        }

        tracing::debug!(libs = ?extra, "pulling in libraries referenced by imports");
        for lib in &extra {
            planner.add_lib(registry, lib);
        }
        libs.extend(extra);
        fetched.extend(fetch_all(resolver, planner.take_pending(), options.show_progress).await);
    }

    report.packages = closure
        .packages
        .iter()
        .map(|p| registry.package_spec(p))
        .collect();
    report.closure = closure;
    report.libs = libs;
    report.files = std::mem::take(&mut planner.refused);

    // 5. 1件でも取得に失敗していたら何も書かない
    if fetched.iter().any(|(_, result)| result.is_err()) {
        report.fetch_aborted = true;
        for (file, result) in fetched {
            if let Err(e) = result {
                report.files.push(FileOutcome {
                    owner: file.owner,
                    target: file.target,
                    dest: Some(file.dest),
                    action: FileAction::Failed,
                    error: Some(e),
                });
            }
        }
        return Ok(report);
    }

    // 6. 書き換えと書き込み（逐次、ロールバックなし）
    for (file, result) in fetched {
        let Ok(source) = result else { continue };
        let content = rewriter.rewrite(&source);
        let outcome = write_file(fs, file, &content, options);
        report.files.push(outcome);
    }

    Ok(report)
}

async fn fetch_all(
    resolver: &dyn FileResolver,
    files: Vec<PlannedFile>,
    show_progress: bool,
) -> Vec<(PlannedFile, Result<String>)> {
    if files.is_empty() {
        return Vec::new();
    }

    let pb = progress_bar(files.len() as u64, show_progress);
    let results = join_all(files.into_iter().map(|file| {
        let pb = &pb;
        async move {
            tracing::info!(source = %file.source, "fetching");
            let result = resolver.read_file(&file.source).await;
            pb.inc(1);
            (file, result)
        }
    }))
    .await;
    pb.finish_and_clear();

    results
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

fn write_file(
    fs: &dyn FileSystem,
    file: PlannedFile,
    content: &str,
    options: &InstallOptions,
) -> FileOutcome {
    let action = match (fs.exists(&file.dest), options.overwrite) {
        (true, false) => FileAction::Skip,
        (true, true) => FileAction::Overwrite,
        (false, _) => FileAction::Create,
    };

    let mut outcome = FileOutcome {
        owner: file.owner,
        target: file.target,
        dest: Some(file.dest.clone()),
        action,
        error: None,
    };

    if action == FileAction::Skip || options.dry_run {
        return outcome;
    }

    let written = match file.dest.parent() {
        Some(parent) => fs.create_dir_all(parent),
        None => Ok(()),
    }
    .and_then(|_| fs.write(&file.dest, content.as_bytes()));

    match written {
        Ok(()) => tracing::info!(dest = %file.dest.display(), action = action.as_str(), "wrote file"),
        Err(e) => {
            tracing::warn!(dest = %file.dest.display(), error = %e, "write failed");
            outcome.action = FileAction::Failed;
            outcome.error = Some(e);
        }
    }

    outcome
}

#[cfg(test)]
#[path = "install_test.rs"]
mod tests;
