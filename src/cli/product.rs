use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use uuid::Uuid;

use cardapio::{
    context::AppContext,
    domain::{
        categories::ProductCategory,
        menu::DEFAULT_TIMEZONE,
        products::models::{NewProduct, ProductFilter, ProductPatch, ProductUuid},
    },
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    Create(CreateProductArgs),
    List(ListProductsArgs),
    Get(GetProductArgs),
    Update(UpdateProductArgs),
    Delete(DeleteProductArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Base price
    #[arg(long)]
    price: Decimal,

    /// Menu category
    #[arg(long)]
    category: ProductCategory,

    /// Whether the product appears on the menu
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    visible: bool,

    /// Position on the menu; lower comes first
    #[arg(long)]
    display_order: Option<i32>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Restrict to one category
    #[arg(long)]
    category: Option<ProductCategory>,

    /// Restrict by visibility
    #[arg(long)]
    visible: Option<bool>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct GetProductArgs {
    /// Product UUID
    #[arg(long)]
    uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct UpdateProductArgs {
    /// Product UUID
    #[arg(long)]
    uuid: Uuid,

    /// New display name
    #[arg(long)]
    name: Option<String>,

    /// New base price
    #[arg(long)]
    price: Option<Decimal>,

    /// New category
    #[arg(long)]
    category: Option<ProductCategory>,

    /// New visibility
    #[arg(long)]
    visible: Option<bool>,

    /// New menu position
    #[arg(long)]
    display_order: Option<i32>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct DeleteProductArgs {
    /// Product UUID
    #[arg(long)]
    uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create(args).await,
        ProductSubcommand::List(args) => list(args).await,
        ProductSubcommand::Get(args) => get(args).await,
        ProductSubcommand::Update(args) => update(args).await,
        ProductSubcommand::Delete(args) => delete(args).await,
    }
}

async fn connect(database_url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(database_url, DEFAULT_TIMEZONE)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}

async fn create(args: CreateProductArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let product = context
        .products
        .create_product(NewProduct {
            name: args.name,
            price: args.price,
            category: args.category,
            visible: args.visible,
            display_order: args.display_order,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("{}", to_json(&product)?);

    Ok(())
}

async fn list(args: ListProductsArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let products = context
        .products
        .list_products(ProductFilter {
            category: args.category,
            visible: args.visible,
        })
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    println!("{}", to_json(&products)?);

    Ok(())
}

async fn get(args: GetProductArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let product = context
        .products
        .get_product(ProductUuid::from_uuid(args.uuid))
        .await
        .map_err(|error| format!("failed to get product: {error}"))?;

    println!("{}", to_json(&product)?);

    Ok(())
}

async fn update(args: UpdateProductArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let product = context
        .products
        .update_product(
            ProductUuid::from_uuid(args.uuid),
            ProductPatch {
                name: args.name,
                price: args.price,
                category: args.category,
                visible: args.visible,
                display_order: args.display_order,
            },
        )
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    println!("{}", to_json(&product)?);

    Ok(())
}

async fn delete(args: DeleteProductArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    context
        .products
        .delete_product(ProductUuid::from_uuid(args.uuid))
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted product {}", args.uuid);

    Ok(())
}
