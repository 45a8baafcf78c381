use std::error::Error;
use std::io::IsTerminal;
use std::sync::LazyLock;

use owo_colors::OwoColorize;
use regex::Regex;

use super::{ErrorCode, KitError};

static QUERY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&])([^=&\s]+)=([^&\s]+)").expect("query param pattern"));

/// Formats KitError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        Self {
            verbose,
            use_color: detect_color(),
        }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &KitError) -> String {
        let code = error.code();
        let mut output = format!("error[{}]: {}", code.as_str(), error);

        let context_lines = Self::format_context(error);
        if !context_lines.is_empty() {
            output.push('\n');
            output.push_str(&context_lines);
        }

        if self.verbose {
            output.push_str(&Self::format_details(error, code));
        }

        // URL の認証情報などはクエリに載るのでマスクする
        let masked = QUERY_PARAM.replace_all(&output, "$1$2=***").to_string();

        if self.use_color {
            Self::apply_color(&masked)
        } else {
            masked
        }
    }

    fn format_context(error: &KitError) -> String {
        let mut lines = Vec::new();

        match error {
            KitError::FetchFailed { url, .. } => lines.push(format!("  --> {}", url)),
            KitError::SourceFileNotFound(path) => {
                lines.push(format!("  --> {}", path.to_string_lossy()))
            }
            KitError::ComponentNotFound { suggestions, .. } if !suggestions.is_empty() => {
                lines.push(format!("  help: did you mean {}?", suggestions.join(", ")))
            }
            _ => {}
        }

        lines.join("\n")
    }

    fn format_details(error: &KitError, code: ErrorCode) -> String {
        let mut output = String::new();

        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", code.cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in code.remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let mut chain = Vec::new();
        let mut current = error.source();
        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }
        if !chain.is_empty() {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Source chain:\n{}", chain.join("\n")));
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `kitctl --help` for more information");

        output
    }

    fn apply_color(text: &str) -> String {
        text.lines()
            .map(|line| {
                if line.starts_with("error[") {
                    let bracket_end = line.find(']').map_or(0, |i| i + 1);
                    let (prefix, rest) = line.split_at(bracket_end);
                    format!("{}{}", prefix.red().bold(), rest.bold())
                } else if line.starts_with("  -->") {
                    line.blue().to_string()
                } else if line.starts_with("  help:") {
                    line.cyan().to_string()
                } else if line.starts_with("  | Cause:") {
                    line.yellow().to_string()
                } else if line.starts_with("  | Remediation:") {
                    line.green().to_string()
                } else if line.starts_with("  = note:") || line.starts_with("  |   -") {
                    line.dimmed().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
