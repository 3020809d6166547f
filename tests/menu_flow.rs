//! End-to-end menu resolution over the public API, backed by the
//! in-memory stores.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use rust_decimal_macros::dec;
use testresult::TestResult;

use cardapio::{
    context::AppContext,
    domain::{
        categories::ProductCategory,
        menu::models::MenuQuery,
        products::models::{NewProduct, ProductPatch},
        promotions::models::{Discount, NewPromotion},
    },
    storage::memory::{MemoryProductStore, MemoryPromotionStore},
};

fn context() -> AppContext {
    AppContext::new(
        Arc::new(MemoryProductStore::new()),
        Arc::new(MemoryPromotionStore::new()),
        "America/Sao_Paulo",
    )
}

fn new_product(name: &str, category: ProductCategory, order: Option<i32>) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: dec!(40.00),
        category,
        visible: true,
        display_order: order,
    }
}

/// Monday 19:00 in São Paulo.
fn monday_dinner() -> TestResult<Timestamp> {
    Ok(date(2025, 1, 6)
        .at(19, 0, 0, 0)
        .in_tz("America/Sao_Paulo")?
        .timestamp())
}

#[tokio::test]
async fn menu_reflects_catalog_changes_end_to_end() -> TestResult {
    let app = context();

    let feijoada = app
        .products
        .create_product(new_product(
            "Feijoada",
            ProductCategory::PratosPrincipais,
            Some(2),
        ))
        .await?;
    let caipirinha = app
        .products
        .create_product(new_product("Caipirinha", ProductCategory::Bebidas, Some(1)))
        .await?;

    let promo = app
        .promotions
        .create_promotion(NewPromotion {
            product_uuid: feijoada.uuid,
            description: "Segunda da feijoada".to_string(),
            discount: Discount::PercentageOff(dec!(25)),
            days_of_week: vec![1],
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
        })
        .await?;

    let items = app
        .menu
        .menu_items(MenuQuery::default(), monday_dinner()?)
        .await?;

    // Sorted by display order, promotion applied to the feijoada only.
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].uuid, caipirinha.uuid);
    assert_eq!(items[1].uuid, feijoada.uuid);
    assert!(items[1].has_active_promotion);
    assert_eq!(items[1].current_price, dec!(30.00));
    assert_eq!(items[1].original_price, dec!(40.00));

    // Hiding a product removes it from the menu without touching data.
    app.products
        .update_product(
            caipirinha.uuid,
            ProductPatch {
                visible: Some(false),
                ..ProductPatch::default()
            },
        )
        .await?;

    let items = app
        .menu
        .menu_items(MenuQuery::default(), monday_dinner()?)
        .await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].uuid, feijoada.uuid);

    // Deleting the promotion restores the base price.
    app.promotions.delete_promotion(promo.uuid).await?;

    let items = app
        .menu
        .menu_items(MenuQuery::default(), monday_dinner()?)
        .await?;
    assert!(!items[0].has_active_promotion);
    assert_eq!(items[0].current_price, dec!(40.00));

    Ok(())
}

#[tokio::test]
async fn deleting_a_product_cascades_and_empties_the_menu() -> TestResult {
    let app = context();

    let product = app
        .products
        .create_product(new_product("Feijoada", ProductCategory::PratosPrincipais, None))
        .await?;

    app.promotions
        .create_promotion(NewPromotion {
            product_uuid: product.uuid,
            description: "Segunda da feijoada".to_string(),
            discount: Discount::Price(dec!(20.00)),
            days_of_week: vec![1],
            start_time: "18:00".to_string(),
            end_time: "20:00".to_string(),
        })
        .await?;

    app.products.delete_product(product.uuid).await?;

    assert!(app.promotions.list_promotions(None).await?.is_empty());
    assert!(
        app.menu
            .menu_items(MenuQuery::default(), monday_dinner()?)
            .await?
            .is_empty()
    );

    Ok(())
}

#[tokio::test]
async fn category_filter_narrows_the_menu() -> TestResult {
    let app = context();

    app.products
        .create_product(new_product("Feijoada", ProductCategory::PratosPrincipais, None))
        .await?;
    app.products
        .create_product(new_product("Caipirinha", ProductCategory::Bebidas, None))
        .await?;

    let drinks = app
        .menu
        .menu_items(
            MenuQuery {
                category: Some(ProductCategory::Bebidas),
                ..MenuQuery::default()
            },
            monday_dinner()?,
        )
        .await?;

    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].name, "Caipirinha");

    Ok(())
}
