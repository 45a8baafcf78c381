use crate::cli::{Cli, Command};
use crate::error::Result;

pub mod add;
pub mod info;
pub mod init;
pub mod list;
pub mod search;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let settings = cli.registry_settings();

    match cli.command {
        Command::Add(args) => add::run(args, &settings).await,
        Command::List(args) => list::run(args, &settings).await,
        Command::Info(args) => info::run(args, &settings).await,
        Command::Search(args) => search::run(args, &settings).await,
        Command::Init(args) => init::run(args),
    }
}
