use crate::application::{FileAction, InstallReport};
use owo_colors::OwoColorize;

/// コマンド末尾のサマリ行
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// add の結果からサマリを組み立てる
    pub fn for_install(report: &InstallReport) -> Self {
        let failed = report.failed_count();
        let written = report.written_count();
        let skipped = report.count(FileAction::Skip);

        if report.fetch_aborted {
            return Self {
                prefix: "✗".red().to_string(),
                message: format!(
                    "Nothing written: {} file(s) could not be fetched",
                    report.count(FileAction::Failed).red()
                ),
            };
        }

        if report.dry_run {
            return Self {
                prefix: "•".yellow().to_string(),
                message: format!(
                    "Dry run: {} file(s) would be written, {} skipped",
                    (report.count(FileAction::Create) + report.count(FileAction::Overwrite))
                        .green(),
                    skipped
                ),
            };
        }

        match (written, failed) {
            (w, f) if w > 0 && f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!(
                    "Partially installed: {} written, {} failed (written files were kept)",
                    w.green(),
                    f.red()
                ),
            },
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} failed, nothing written", f.red()),
            },
            (w, _) if w > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} file(s) written, {} skipped", w.green(), skipped),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: format!("Nothing to do, {} file(s) already present", skipped),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}
