use crate::shared::components::catalog_sheet::{CatalogSheet, SHEET_PRODUCT};
use crate::shared::components::page_badge::PageBadge;
use crate::shared::components::sheet_header::SheetHeader;
use crate::shared::components::spec_table::MatrixTable;
use contracts::domain::a001_catalogue_product::ProductRecord;
use contracts::enums::TemplateVariant;
use contracts::shared::template_dispatcher::SheetAssets;
use leptos::prelude::*;
use std::sync::Arc;

/// Kits couverts, boîtes XPS / pizza, pailles, film étirable: hero image next
/// to the reference matrix, then a full-width "mise en situation" band.
#[component]
pub fn MatrixSheet(
    product: Arc<ProductRecord>,
    variant: TemplateVariant,
    assets: SheetAssets,
) -> impl IntoView {
    let title = if product.title.trim().is_empty() {
        variant.display_name().to_string()
    } else {
        product.title.clone()
    };
    let alt = title.clone();

    view! {
        <CatalogSheet kind=SHEET_PRODUCT class=format!("sheet-matrix sheet-matrix--{}", variant.code())>
            <PageBadge category=product.category_key().map(str::to_string) />
            <SheetHeader
                title=title
                subtitle=product.subtitle.clone()
                temperature=product.temperature.clone()
            />
            <div class="sheet-matrix__main">
                {assets.image.map(|src| view! {
                    <div class="sheet-hero">
                        <img class="sheet-hero__image" src=src alt=alt />
                    </div>
                })}
                <MatrixTable rows=product.variants.clone() />
            </div>
            {product.bottom_badge.clone().map(|badge| view! {
                <div class="sheet-matrix__badge">{badge}</div>
            })}
            {assets.bottom_image.map(|src| view! {
                <div class="sheet-matrix__scene">
                    <img class="sheet-matrix__scene-image" src=src alt="" />
                </div>
            })}
            {product.bottom_note.clone().map(|note| view! {
                <p class="sheet-matrix__note">{note}</p>
            })}
        </CatalogSheet>
    }
}
