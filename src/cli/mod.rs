use clap::{Parser, Subcommand};

mod menu;
mod product;
mod promotion;

#[derive(Debug, Parser)]
#[command(name = "cardapio", about = "Cardapio CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(product::ProductCommand),
    Promotion(promotion::PromotionCommand),
    Menu(menu::MenuCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Product(command) => product::run(command).await,
            Commands::Promotion(command) => promotion::run(command).await,
            Commands::Menu(command) => menu::run(command).await,
        }
    }
}

/// Renders a serializable value as pretty JSON for terminal output.
fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|error| format!("failed to render output: {error}"))
}
