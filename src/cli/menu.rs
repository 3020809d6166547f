use clap::{Args, Subcommand};
use jiff::Timestamp;

use cardapio::{
    context::AppContext,
    domain::{
        categories::ProductCategory,
        menu::{DEFAULT_TIMEZONE, models::MenuQuery},
    },
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    Show(ShowMenuArgs),
}

#[derive(Debug, Args)]
struct ShowMenuArgs {
    /// Restrict to one category
    #[arg(long)]
    category: Option<ProductCategory>,

    /// IANA timezone used to decide which promotions are live
    #[arg(long, env = "CARDAPIO_TIMEZONE")]
    timezone: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(command: MenuCommand) -> Result<(), String> {
    match command.command {
        MenuSubcommand::Show(args) => show(args).await,
    }
}

async fn show(args: ShowMenuArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(&args.database_url, DEFAULT_TIMEZONE)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let items = context
        .menu
        .menu_items(
            MenuQuery {
                category: args.category,
                timezone: args.timezone,
            },
            Timestamp::now(),
        )
        .await
        .map_err(|error| format!("failed to resolve menu: {error}"))?;

    println!("{}", to_json(&items)?);

    Ok(())
}
