use crate::error::Result;
use crate::project::ProjectConfig;
use crate::transform::rules::{build_rules, ImportRule};

/// プロジェクト設定に基づくインポート書き換え器
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: Vec<ImportRule>,
}

impl Rewriter {
    pub fn new(config: &ProjectConfig) -> Result<Self> {
        Ok(Self {
            rules: build_rules(config)?,
        })
    }

    #[cfg(test)]
    pub fn rules(&self) -> &[ImportRule] {
        &self.rules
    }

    /// ルールを順に適用した結果を返す
    ///
    /// 各ルールは前のルールの出力に対して適用される。マッチしない入力はそのまま返る。
    pub fn rewrite(&self, source: &str) -> String {
        self.rules.iter().fold(source.to_string(), |text, rule| {
            if rule.matches(&text) {
                tracing::debug!(rule = rule.name, "applying import rule");
                rule.apply(&text)
            } else {
                text
            }
        })
    }
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;
