use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use uuid::Uuid;

use cardapio::{
    context::AppContext,
    domain::{
        menu::DEFAULT_TIMEZONE,
        products::models::ProductUuid,
        promotions::models::{Discount, NewPromotion, PromotionPatch, PromotionUuid},
    },
};

use super::to_json;

#[derive(Debug, Args)]
pub(crate) struct PromotionCommand {
    #[command(subcommand)]
    command: PromotionSubcommand,
}

#[derive(Debug, Subcommand)]
enum PromotionSubcommand {
    Create(CreatePromotionArgs),
    List(ListPromotionsArgs),
    Get(GetPromotionArgs),
    Update(UpdatePromotionArgs),
    Delete(DeletePromotionArgs),
}

#[derive(Debug, Args)]
struct CreatePromotionArgs {
    /// Product the promotion applies to
    #[arg(long)]
    product_uuid: Uuid,

    /// Promotion description
    #[arg(long)]
    description: String,

    /// Promotional price; mutually exclusive with --percentage
    #[arg(long, conflicts_with = "percentage", required_unless_present = "percentage")]
    price: Option<Decimal>,

    /// Percentage off the product price
    #[arg(long)]
    percentage: Option<Decimal>,

    /// Active day of week, 0 = Sunday through 6 = Saturday; repeatable
    #[arg(long = "day", required = true)]
    days: Vec<u8>,

    /// Window start, HH:MM
    #[arg(long)]
    start: String,

    /// Window end, HH:MM
    #[arg(long)]
    end: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct ListPromotionsArgs {
    /// Restrict to one product
    #[arg(long)]
    product_uuid: Option<Uuid>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct GetPromotionArgs {
    /// Promotion UUID
    #[arg(long)]
    uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct UpdatePromotionArgs {
    /// Promotion UUID
    #[arg(long)]
    uuid: Uuid,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New promotional price; mutually exclusive with --percentage
    #[arg(long, conflicts_with = "percentage")]
    price: Option<Decimal>,

    /// New percentage off the product price
    #[arg(long)]
    percentage: Option<Decimal>,

    /// Replacement day set, 0 = Sunday through 6 = Saturday; repeatable
    #[arg(long = "day")]
    days: Vec<u8>,

    /// New window start, HH:MM
    #[arg(long)]
    start: Option<String>,

    /// New window end, HH:MM
    #[arg(long)]
    end: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
struct DeletePromotionArgs {
    /// Promotion UUID
    #[arg(long)]
    uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(command: PromotionCommand) -> Result<(), String> {
    match command.command {
        PromotionSubcommand::Create(args) => create(args).await,
        PromotionSubcommand::List(args) => list(args).await,
        PromotionSubcommand::Get(args) => get(args).await,
        PromotionSubcommand::Update(args) => update(args).await,
        PromotionSubcommand::Delete(args) => delete(args).await,
    }
}

async fn connect(database_url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(database_url, DEFAULT_TIMEZONE)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}

fn discount(price: Option<Decimal>, percentage: Option<Decimal>) -> Option<Discount> {
    match (price, percentage) {
        (Some(price), None) => Some(Discount::Price(price)),
        (None, Some(pct)) => Some(Discount::PercentageOff(pct)),
        _ => None,
    }
}

async fn create(args: CreatePromotionArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let discount = discount(args.price, args.percentage)
        .ok_or_else(|| "either --price or --percentage is required".to_string())?;

    let promotion = context
        .promotions
        .create_promotion(NewPromotion {
            product_uuid: ProductUuid::from_uuid(args.product_uuid),
            description: args.description,
            discount,
            days_of_week: args.days,
            start_time: args.start,
            end_time: args.end,
        })
        .await
        .map_err(|error| format!("failed to create promotion: {error}"))?;

    println!("{}", to_json(&promotion)?);

    Ok(())
}

async fn list(args: ListPromotionsArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let promotions = context
        .promotions
        .list_promotions(args.product_uuid.map(ProductUuid::from_uuid))
        .await
        .map_err(|error| format!("failed to list promotions: {error}"))?;

    println!("{}", to_json(&promotions)?);

    Ok(())
}

async fn get(args: GetPromotionArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let promotion = context
        .promotions
        .get_promotion(PromotionUuid::from_uuid(args.uuid))
        .await
        .map_err(|error| format!("failed to get promotion: {error}"))?;

    println!("{}", to_json(&promotion)?);

    Ok(())
}

async fn update(args: UpdatePromotionArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    let days = if args.days.is_empty() {
        None
    } else {
        Some(args.days)
    };

    let promotion = context
        .promotions
        .update_promotion(
            PromotionUuid::from_uuid(args.uuid),
            PromotionPatch {
                description: args.description,
                discount: discount(args.price, args.percentage),
                days_of_week: days,
                start_time: args.start,
                end_time: args.end,
            },
        )
        .await
        .map_err(|error| format!("failed to update promotion: {error}"))?;

    println!("{}", to_json(&promotion)?);

    Ok(())
}

async fn delete(args: DeletePromotionArgs) -> Result<(), String> {
    let context = connect(&args.database_url).await?;

    context
        .promotions
        .delete_promotion(PromotionUuid::from_uuid(args.uuid))
        .await
        .map_err(|error| format!("failed to delete promotion: {error}"))?;

    println!("deleted promotion {}", args.uuid);

    Ok(())
}
