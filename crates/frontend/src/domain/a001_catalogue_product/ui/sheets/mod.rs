//! Product sheets, one layout per `TemplateVariant`.

mod matrix;
mod standard;

use contracts::domain::a001_catalogue_product::ProductRecord;
use contracts::enums::TemplateVariant;
use contracts::shared::template_dispatcher::{dispatch, SheetAssets};
use leptos::prelude::*;
use std::sync::Arc;

pub use matrix::MatrixSheet;
pub use standard::{StandardDoubleSheet, StandardSingleSheet};

/// Picks the layout for a product and renders it. Never fails: unknown slugs
/// get a standard sheet, missing images get the variant's placeholders.
pub fn render_by_template(product: Arc<ProductRecord>) -> AnyView {
    let variant = dispatch(&product);
    let assets = SheetAssets::resolve(variant, &product);

    match variant {
        TemplateVariant::StandardSingle => {
            view! { <StandardSingleSheet product=product assets=assets /> }.into_any()
        }
        TemplateVariant::StandardDouble => {
            view! { <StandardDoubleSheet product=product assets=assets /> }.into_any()
        }
        _ => view! { <MatrixSheet product=product variant=variant assets=assets /> }.into_any(),
    }
}
