use super::global_context::use_catalogue;
use crate::routes::routes::AppRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn BookToolbar() -> impl IntoView {
    let ctx = use_catalogue();

    let indicator = move || ctx.engine.with(|engine| engine.page_indicator());
    let no_previous = move || ctx.engine.with(|engine| !engine.can_go_previous());
    let no_next = move || ctx.engine.with(|engine| !engine.can_go_next());

    view! {
        <header class="book-toolbar">
            <div class="book-toolbar__links">
                <a class="book-toolbar__link" href=AppRoute::Cover.href()>{icon("book")} "Couverture"</a>
                <a class="book-toolbar__link" href=AppRoute::Grid.href()>{icon("grid")} "Tous les produits"</a>
            </div>
            <div class="book-toolbar__nav">
                <button
                    class="book-toolbar__button"
                    aria-label="Page précédente"
                    disabled=no_previous
                    on:click=move |_| ctx.previous()
                >
                    {icon("chevron-left")}
                </button>
                <span class="book-toolbar__indicator">{indicator}</span>
                <button
                    class="book-toolbar__button"
                    aria-label="Page suivante"
                    disabled=no_next
                    on:click=move |_| ctx.next()
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </header>
    }
}
