//! kitctl search コマンド

use crate::application::{search_components, Session};
use crate::config::RegistrySettings;
use crate::error::{KitError, Result};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// 検索語（名前・タイトル・説明の部分一致）
    pub query: String,

    /// 最大件数
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

pub async fn run(args: Args, settings: &RegistrySettings) -> Result<()> {
    if args.query.trim().is_empty() {
        return Err(KitError::InvalidArgument(
            "search query must not be empty".to_string(),
        ));
    }

    let session = Session::open(settings);
    let registry = session.registry().await?;
    let results = search_components(registry, &args.query, args.limit);

    if results.is_empty() {
        println!("No components matched '{}'", args.query);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Title", "Description"]);
    for component in &results {
        table.add_row(vec![
            component.name.as_str(),
            component.title.as_str(),
            component.description.as_str(),
        ]);
    }

    println!("{table}");
    println!("{} result(s)", results.len());
    Ok(())
}
