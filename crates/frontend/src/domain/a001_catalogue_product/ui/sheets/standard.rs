use crate::shared::components::catalog_sheet::{CatalogSheet, SHEET_PRODUCT};
use crate::shared::components::page_badge::PageBadge;
use crate::shared::components::sheet_header::SheetHeader;
use crate::shared::components::spec_table::SpecsTable;
use contracts::domain::a001_catalogue_product::ProductRecord;
use contracts::shared::template_dispatcher::SheetAssets;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn StandardSingleSheet(product: Arc<ProductRecord>, assets: SheetAssets) -> impl IntoView {
    let alt = product.title.clone();

    view! {
        <CatalogSheet kind=SHEET_PRODUCT class="sheet-standard">
            <PageBadge category=product.category_key().map(str::to_string) />
            <SheetHeader
                title=product.title.clone()
                subtitle=product.subtitle.clone()
                temperature=product.temperature.clone()
            />
            <div class="sheet-card">
                {assets.image.map(|src| view! {
                    <div class="sheet-card__image">
                        <img src=src alt=alt />
                    </div>
                })}
                <SpecsTable rows=product.specs.clone() />
                {assets.bottom_image.map(|src| view! {
                    <div class="sheet-card__image sheet-card__image--bottom">
                        <img src=src alt="" />
                    </div>
                })}
            </div>
        </CatalogSheet>
    }
}

/// Two cards: product + specs, then an information card.
#[component]
pub fn StandardDoubleSheet(product: Arc<ProductRecord>, assets: SheetAssets) -> impl IntoView {
    let alt = product.title.clone();

    view! {
        <CatalogSheet kind=SHEET_PRODUCT class="sheet-standard sheet-standard--double">
            <PageBadge category=product.category_key().map(str::to_string) />
            <SheetHeader
                title=product.title.clone()
                subtitle=product.subtitle.clone()
                temperature=product.temperature.clone()
            />
            <div class="sheet-standard__columns">
                <div class="sheet-card">
                    {assets.image.map(|src| view! {
                        <div class="sheet-card__image">
                            <img src=src alt=alt />
                        </div>
                    })}
                    <SpecsTable rows=product.specs.clone() />
                </div>
                <div class="sheet-card sheet-card--info">
                    <h3 class="sheet-card__title">"Informations"</h3>
                    {product.bottom_note.clone().map(|note| view! {
                        <p class="sheet-card__note">{note}</p>
                    })}
                    {product.bottom_badge.clone().map(|badge| view! {
                        <span class="sheet-card__badge">{badge}</span>
                    })}
                    {assets.bottom_image.map(|src| view! {
                        <div class="sheet-card__image">
                            <img src=src alt="" />
                        </div>
                    })}
                </div>
            </div>
        </CatalogSheet>
    }
}
