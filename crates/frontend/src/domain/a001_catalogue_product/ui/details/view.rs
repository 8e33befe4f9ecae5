use super::super::sheets::render_by_template;
use crate::layout::global_context::use_catalogue;
use crate::routes::routes::AppRoute;
use leptos::prelude::*;

/// Отдельная страница товара (`?p=<slug>`)
#[component]
pub fn ProductPage(#[prop(into)] slug: String) -> impl IntoView {
    let ctx = use_catalogue();
    let product = ctx.catalogue.with_value(|catalogue| catalogue.find_by_slug(&slug));

    let content = match product {
        Some(product) => render_by_template(product),
        None => {
            log::warn!("Product not found: {}", slug);
            view! {
                <div class="product-page__missing">
                    <p class="product-page__missing-title">"Produit introuvable"</p>
                    <p class="product-page__missing-slug">{slug}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="product-page">
            <nav class="product-page__nav">
                <a href=AppRoute::Catalogue.href()>"Retour au catalogue"</a>
                <a href=AppRoute::Grid.href()>"Tous les produits"</a>
            </nav>
            {content}
        </div>
    }
}
