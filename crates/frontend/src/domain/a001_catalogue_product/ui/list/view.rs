use super::state::ProductCard;
use crate::layout::global_context::use_catalogue;
use crate::routes::routes::AppRoute;
use leptos::prelude::*;

/// Сетка всех товаров; карточка ведёт на страницу товара.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_catalogue();
    let uncategorized = ctx
        .config
        .with_value(|config| config.categories.uncategorized_label.clone());
    let cards: Vec<ProductCard> = ctx.catalogue.with_value(|catalogue| {
        catalogue
            .products()
            .iter()
            .map(|product| ProductCard::from_record(product, &uncategorized))
            .collect()
    });

    view! {
        <main class="product-grid">
            <header class="product-grid__header">
                <h1 class="product-grid__title">"Catalogue FoxyTable"</h1>
                <div class="product-grid__rule"></div>
                <a class="product-grid__back" href=AppRoute::Catalogue.href()>"Feuilleter le catalogue"</a>
            </header>
            <div class="product-grid__items">
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <a class="product-card" href=card.href>
                                {card.image.map(|src| view! {
                                    <img class="product-card__image" src=src alt=card.title.clone() />
                                })}
                                <div class="product-card__body">
                                    <p class="product-card__category">{card.category}</p>
                                    <h2 class="product-card__title">{card.title}</h2>
                                    {card.description.map(|text| view! {
                                        <p class="product-card__description">{text}</p>
                                    })}
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
