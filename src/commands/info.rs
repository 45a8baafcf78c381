//! kitctl info コマンド
//!
//! コンポーネントの詳細と依存閉包を表示する。

use crate::application::{describe_component, ComponentDetail, Session};
use crate::config::RegistrySettings;
use crate::error::{KitError, Result};
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use std::collections::BTreeSet;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// コンポーネント名（名前・タイトル・別名）
    pub name: String,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub async fn run(args: Args, settings: &RegistrySettings) -> Result<()> {
    let session = Session::open(settings);
    let registry = session.registry().await?;
    let aliases = session.aliases().await?;

    let detail = describe_component(registry, &aliases, &args.name)?;

    match args.format {
        OutputFormat::Table => print_table(&detail),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Yaml => print_yaml(&detail)?,
    }

    Ok(())
}

fn print_table(detail: &ComponentDetail) {
    println!("Component Information");
    println!("=====================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Name", &detail.name]);
    table.add_row(vec!["Title", &detail.title]);
    table.add_row(vec!["Export", &detail.export_name]);
    table.add_row(vec!["Category", or_dash(&detail.category)]);
    table.add_row(vec!["Description", or_dash(&detail.description)]);

    println!("{table}");
    println!();

    println!("Files");
    println!("-----");

    let mut files_table = Table::new();
    files_table.load_preset(UTF8_FULL);
    files_table.set_header(vec!["Source", "Target"]);
    for file in &detail.files {
        files_table.add_row(vec![file.source.as_str(), file.target.as_str()]);
    }

    println!("{files_table}");
    println!();

    println!("Dependencies");
    println!("------------");

    let mut deps_table = Table::new();
    deps_table.load_preset(UTF8_FULL);
    deps_table.set_header(vec!["Type", "Items"]);

    deps_table.add_row(vec!["Components", &format_set(&detail.closure.components)]);
    deps_table.add_row(vec!["Libraries", &format_set(&detail.libs)]);
    deps_table.add_row(vec!["Packages", &format_list(&detail.packages)]);

    println!("{deps_table}");
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn format_set(items: &BTreeSet<String>) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn print_yaml(detail: &ComponentDetail) -> Result<()> {
    let yaml = serde_yaml::to_string(detail)
        .map_err(|e| KitError::InvalidArgument(format!("failed to serialize to YAML: {}", e)))?;
    print!("{yaml}");
    Ok(())
}
