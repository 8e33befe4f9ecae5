use crate::routes::routes::AppRoute;
use crate::shared::components::catalog_sheet::{CatalogSheet, SHEET_COVER};
use leptos::prelude::*;

#[component]
pub fn CoverPage() -> impl IntoView {
    view! {
        <div class="cover-page">
            <CatalogSheet kind=SHEET_COVER>
                <div class="cover__header">
                    <h2 class="cover__title">"L’Art de la Table Durable"</h2>
                    <p class="cover__lead">"Découvrez nos solutions durables pour la restauration."</p>
                    <img class="cover__logo" src="/images/Logo_foxy.png" alt="Logo FoxyTable" />
                    <div class="cover__rule"></div>
                </div>
                <div class="cover__visual">
                    <img src="/images/cover.png" alt="Couverture FoxyTable" />
                    <span class="cover__year">"2026"</span>
                </div>
                <div class="cover__cta">
                    <a class="cover__button" href=AppRoute::Catalogue.href()>"Entrer dans le catalogue →"</a>
                </div>
            </CatalogSheet>
        </div>
    }
}
