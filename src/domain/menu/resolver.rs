//! Pure menu resolution over product and promotion snapshots.

use crate::domain::{
    categories::ProductCategory,
    menu::{
        models::{MenuItem, MenuItemPromotion},
        moment::LocalMoment,
    },
    products::models::Product,
    promotions::models::Promotion,
};

/// Resolves the menu for one instant.
///
/// Keeps visible products (matching `category` when supplied), attaches
/// the first promotion in snapshot order that is active at `moment`, and
/// sorts by `display_order` ascending with `None` treated as `0` — not as
/// "last". The sort is stable, so ties keep snapshot order.
#[must_use]
pub fn resolve_menu(
    products: &[Product],
    promotions: &[Promotion],
    moment: LocalMoment,
    category: Option<ProductCategory>,
) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = products
        .iter()
        .filter(|product| product.visible)
        .filter(|product| category.is_none_or(|c| product.category == c))
        .map(|product| {
            let active = active_promotion(product, promotions, moment);

            MenuItem {
                uuid: product.uuid,
                name: product.name.clone(),
                category: product.category,
                original_price: product.price,
                current_price: active.map_or(product.price, |promo| promo.promotional_price),
                has_active_promotion: active.is_some(),
                promotion: active.map(|promo| MenuItemPromotion {
                    description: promo.description.clone(),
                    promotional_price: promo.promotional_price,
                }),
                display_order: product.display_order,
            }
        })
        .collect();

    items.sort_by_key(|item| item.display_order.unwrap_or(0));

    items
}

/// First promotion in snapshot order owned by `product` and active at
/// `moment`. Overlapping promotions are not ranked; snapshot order is the
/// tie-break.
fn active_promotion<'a>(
    product: &Product,
    promotions: &'a [Promotion],
    moment: LocalMoment,
) -> Option<&'a Promotion> {
    promotions.iter().find(|promo| {
        promo.product_uuid == product.uuid && promo.is_active_at(moment.day, moment.time)
    })
}
