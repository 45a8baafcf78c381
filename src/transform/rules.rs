use crate::error::{KitError, Result};
use crate::project::ProjectConfig;
use crate::transform::case::to_kebab_case;
use regex::{Captures, Regex};

/// ライブラリエイリアス配下に置かれるサブパッケージ
pub const LIB_PACKAGES: [&str; 3] = ["types", "services", "hooks"];

/// import 文のリード部分（`from`、副作用 import、動的 `import()`）
const LEAD: &str = r#"(?P<lead>\bfrom\s+|\bimport\s*\(\s*|\bimport\s+)(?P<q>['"])"#;

/// 閉じクオート
const END: &str = r#"(?P<e>['"])"#;

/// マッチ後の置換方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// `$name` 形式のテンプレート置換
    Template(String),
    /// PascalCase のコンポーネント名を kebab-case にして prefix 配下へ
    PascalToKebab { prefix: String },
}

/// 書き換えルール1件
#[derive(Debug, Clone)]
pub struct ImportRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub action: RuleAction,
}

impl ImportRule {
    fn new(name: &'static str, pattern: &str, action: RuleAction) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| KitError::Config(format!("invalid import rule '{}': {}", name, e)))?;
        Ok(Self {
            name,
            pattern,
            action,
        })
    }

    /// テキスト全体にこのルールを適用
    pub fn apply(&self, text: &str) -> String {
        match &self.action {
            RuleAction::Template(template) => self
                .pattern
                .replace_all(text, template.as_str())
                .into_owned(),
            RuleAction::PascalToKebab { prefix } => self
                .pattern
                .replace_all(text, |caps: &Captures| {
                    let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());
                    format!(
                        "{}{}{}/{}{}{}",
                        group("lead"),
                        group("q"),
                        prefix,
                        to_kebab_case(group("name")),
                        group("rest"),
                        group("e"),
                    )
                })
                .into_owned(),
        }
    }

    /// このルールにマッチする箇所があるか
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// 置換テンプレートに埋め込むため `$` をエスケープ
fn template_literal(value: &str) -> String {
    value.trim_end_matches('/').replace('$', "$$")
}

/// プロジェクト設定から順序付きのルール表を作る
pub fn build_rules(config: &ProjectConfig) -> Result<Vec<ImportRule>> {
    let ns = regex::escape(config.namespace.trim_end_matches('/'));
    let lib = template_literal(&config.lib_alias);
    let components = template_literal(&config.components_alias);
    let lib_packages = LIB_PACKAGES.join("|");

    Ok(vec![
        ImportRule::new(
            "type-import",
            &format!(
                r#"(?P<lead>\bimport\s+type\s+\{{[^}}]*\}}\s*from\s+)(?P<q>['"]){ns}/(?P<pkg>{lib_packages}){END}"#
            ),
            RuleAction::Template(format!("${{lead}}${{q}}{lib}/${{pkg}}${{e}}")),
        )?,
        ImportRule::new(
            "lib-subpath",
            &format!(r#"{LEAD}{ns}/(?P<pkg>{lib_packages})/(?P<rest>[^'"\s]+){END}"#),
            RuleAction::Template(format!("${{lead}}${{q}}{lib}/${{pkg}}/${{rest}}${{e}}")),
        )?,
        ImportRule::new(
            "lib-bare",
            &format!(r#"{LEAD}{ns}/(?P<pkg>{lib_packages}){END}"#),
            RuleAction::Template(format!("${{lead}}${{q}}{lib}/${{pkg}}${{e}}")),
        )?,
        ImportRule::new(
            "primitives",
            &format!(r#"{LEAD}{ns}/primitives(?P<rest>/[^'"\s]+)?{END}"#),
            RuleAction::Template(format!("${{lead}}${{q}}{components}/ui${{rest}}${{e}}")),
        )?,
        ImportRule::new(
            "interfaces",
            &format!(r#"{LEAD}{ns}/interfaces(?P<rest>/[^'"\s]+)?{END}"#),
            RuleAction::Template(format!(
                "${{lead}}${{q}}{components}/interfaces${{rest}}${{e}}"
            )),
        )?,
        ImportRule::new(
            "sibling-component",
            &format!(r#"{LEAD}\.\./(?P<name>[A-Z][A-Za-z0-9]*)(?P<rest>/[^'"\s]+)?{END}"#),
            RuleAction::PascalToKebab {
                prefix: format!("{}/interfaces", config.components_alias.trim_end_matches('/')),
            },
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> ImportRule {
        build_rules(&ProjectConfig::default())
            .unwrap()
            .into_iter()
            .find(|r| r.name == name)
            .unwrap()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = build_rules(&ProjectConfig::default())
            .unwrap()
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "type-import",
                "lib-subpath",
                "lib-bare",
                "primitives",
                "interfaces",
                "sibling-component",
            ]
        );
    }

    #[test]
    fn test_type_import_rule() {
        let r = rule("type-import");
        assert_eq!(
            r.apply("import type { Field, Schema } from '@kit/types';"),
            "import type { Field, Schema } from '@/lib/types';"
        );
        // 値の import は対象外
        assert!(!r.matches("import { Field } from '@kit/types';"));
    }

    #[test]
    fn test_lib_subpath_rule() {
        let r = rule("lib-subpath");
        assert_eq!(
            r.apply(r#"import { useForm } from "@kit/hooks/form/use-form";"#),
            r#"import { useForm } from "@/lib/hooks/form/use-form";"#
        );
        assert!(!r.matches("import { x } from '@kit/hooks';"));
    }

    #[test]
    fn test_lib_bare_rule() {
        let r = rule("lib-bare");
        assert_eq!(
            r.apply("import { api } from '@kit/services';"),
            "import { api } from '@/lib/services';"
        );
        assert!(!r.matches("import { x } from '@kit/typesafe';"));
    }

    #[test]
    fn test_primitives_rule() {
        let r = rule("primitives");
        assert_eq!(
            r.apply("import { Button } from '@kit/primitives';"),
            "import { Button } from '@/components/ui';"
        );
        assert_eq!(
            r.apply("import { Button } from '@kit/primitives/button';"),
            "import { Button } from '@/components/ui/button';"
        );
        assert_eq!(
            r.apply("import '@kit/primitives/styles.css';"),
            "import '@/components/ui/styles.css';"
        );
    }

    #[test]
    fn test_dynamic_import_is_rewritten() {
        assert_eq!(
            rule("lib-bare").apply("const m = await import('@kit/hooks');"),
            "const m = await import('@/lib/hooks');"
        );
        assert_eq!(
            rule("primitives").apply("const d = import( \"@kit/primitives/dialog\" );"),
            "const d = import( \"@/components/ui/dialog\" );"
        );
        assert_eq!(
            rule("sibling-component").apply("import('../DatePicker')"),
            "import('@/components/interfaces/date-picker')"
        );
    }

    #[test]
    fn test_interfaces_rule() {
        let r = rule("interfaces");
        assert_eq!(
            r.apply("export { Boolean } from '@kit/interfaces/boolean';"),
            "export { Boolean } from '@/components/interfaces/boolean';"
        );
    }

    #[test]
    fn test_sibling_component_rule() {
        let r = rule("sibling-component");
        assert_eq!(
            r.apply("import { DatePicker } from '../DatePicker';"),
            "import { DatePicker } from '@/components/interfaces/date-picker';"
        );
        assert_eq!(
            r.apply("import { Field } from \"../SelectDropdown/field\";"),
            "import { Field } from \"@/components/interfaces/select-dropdown/field\";"
        );
        // 小文字で始まる相対パスはコンポーネントではない
        assert!(!r.matches("import { x } from '../utils';"));
    }

    #[test]
    fn test_custom_namespace_is_escaped() {
        let config = ProjectConfig {
            namespace: "@my.kit".to_string(),
            ..ProjectConfig::default()
        };
        let rules = build_rules(&config).unwrap();
        let lib_bare = rules.iter().find(|r| r.name == "lib-bare").unwrap();

        assert!(lib_bare.matches("import { a } from '@my.kit/types';"));
        assert!(!lib_bare.matches("import { a } from '@myXkit/types';"));
    }

    #[test]
    fn test_dollar_in_alias_is_literal() {
        let config = ProjectConfig {
            lib_alias: "$lib".to_string(),
            ..ProjectConfig::default()
        };
        let rules = build_rules(&config).unwrap();
        let lib_bare = rules.iter().find(|r| r.name == "lib-bare").unwrap();

        assert_eq!(
            lib_bare.apply("import { a } from '@kit/types';"),
            "import { a } from '$lib/types';"
        );
    }

    #[test]
    fn test_trailing_slash_alias() {
        let config = ProjectConfig {
            components_alias: "~/components/".to_string(),
            ..ProjectConfig::default()
        };
        let rules = build_rules(&config).unwrap();
        let primitives = rules.iter().find(|r| r.name == "primitives").unwrap();

        assert_eq!(
            primitives.apply("import { Button } from '@kit/primitives';"),
            "import { Button } from '~/components/ui';"
        );
    }
}
