//! kitctl list コマンド
//!
//! レジストリのコンポーネント一覧を表示する。

use crate::application::{list_components, ComponentSummary, Session};
use crate::config::RegistrySettings;
use crate::error::Result;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// カテゴリで絞り込み（名前またはタイトル）
    #[arg(long)]
    pub category: Option<String>,

    /// JSON で出力
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, settings: &RegistrySettings) -> Result<()> {
    let session = Session::open(settings);
    let registry = session.registry().await?;

    let components = list_components(registry, args.category.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        print_table(&components, registry.components.len());
    }

    Ok(())
}

fn print_table(components: &[ComponentSummary], total_count: usize) {
    if components.is_empty() {
        if total_count == 0 {
            println!("Registry has no components");
        } else {
            println!("No components matched");
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Title", "Category", "Depends On"]);

    for component in components {
        table.add_row(vec![
            component.name.as_str(),
            component.title.as_str(),
            component.category.as_str(),
            &format_list(&component.registry_dependencies),
        ]);
    }

    println!("{table}");
    println!("{} component(s)", components.len());
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
