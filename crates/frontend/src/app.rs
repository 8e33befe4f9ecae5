use crate::layout::global_context::CatalogueContext;
use crate::routes::routes::{AppRoute, AppRoutes};
use crate::shared::components::error_screen::ErrorScreen;
use crate::shared::data::load_bundle;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let route = AppRoute::from_location();

    match load_bundle() {
        Ok((catalogue, config)) => {
            log::info!(
                "Catalogue ready: {} products, route {:?}",
                catalogue.products().len(),
                route
            );
            // The whole app reads the catalogue and the book position from context.
            provide_context(CatalogueContext::new(catalogue, config));

            view! { <AppRoutes route=route /> }.into_any()
        }
        Err(e) => {
            log::error!("Catalogue failed to load: {}", e);
            view! {
                <ErrorScreen title="Erreur pendant le chargement du catalogue" message=e />
            }
            .into_any()
        }
    }
}
