use crate::domain::a001_catalogue_product::ui::list::ProductGrid;
use crate::domain::a001_catalogue_product::ui::details::ProductPage;
use crate::domain::a002_catalogue_book::ui::book::CatalogueBook;
use crate::domain::a002_catalogue_book::ui::cover::CoverPage;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Вид приложения, выбранный строкой запроса.
///
/// Routing is query-string only (`?view=grid`, `?p=<slug>`), links reload
/// the page and the book always opens on the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Cover,
    Catalogue,
    Grid,
    Product(String),
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct RouteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    p: Option<String>,
}

impl AppRoute {
    /// Parses `location.search`. Unknown views open the catalogue.
    pub fn from_search(search: &str) -> Self {
        let query: RouteQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        if let Some(slug) = query.p.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            return AppRoute::Product(slug);
        }

        match query.view.as_deref().map(str::trim) {
            Some("cover") => AppRoute::Cover,
            Some("grid") => AppRoute::Grid,
            _ => AppRoute::Catalogue,
        }
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_search(&search)
    }

    pub fn href(&self) -> String {
        let query = match self {
            AppRoute::Cover => RouteQuery {
                view: Some("cover".to_string()),
                p: None,
            },
            AppRoute::Catalogue => RouteQuery::default(),
            AppRoute::Grid => RouteQuery {
                view: Some("grid".to_string()),
                p: None,
            },
            AppRoute::Product(slug) => RouteQuery {
                view: None,
                p: Some(slug.clone()),
            },
        };
        let query_string = serde_qs::to_string(&query).unwrap_or_default();
        if query_string.is_empty() {
            "?".to_string()
        } else {
            format!("?{}", query_string)
        }
    }
}

#[component]
pub fn AppRoutes(route: AppRoute) -> impl IntoView {
    match route {
        AppRoute::Cover => view! { <CoverPage /> }.into_any(),
        AppRoute::Catalogue => view! { <CatalogueBook /> }.into_any(),
        AppRoute::Grid => view! { <ProductGrid /> }.into_any(),
        AppRoute::Product(slug) => view! { <ProductPage slug=slug /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_is_catalogue() {
        assert_eq!(AppRoute::from_search(""), AppRoute::Catalogue);
        assert_eq!(AppRoute::from_search("?"), AppRoute::Catalogue);
        assert_eq!(AppRoute::from_search("?view=unknown"), AppRoute::Catalogue);
    }

    #[test]
    fn test_views() {
        assert_eq!(AppRoute::from_search("?view=cover"), AppRoute::Cover);
        assert_eq!(AppRoute::from_search("view=grid"), AppRoute::Grid);
    }

    #[test]
    fn test_product_slug_wins_over_view() {
        assert_eq!(
            AppRoute::from_search("?view=grid&p=boites-pizza"),
            AppRoute::Product("boites-pizza".to_string())
        );
        assert_eq!(AppRoute::from_search("?p=%20%20"), AppRoute::Catalogue);
    }

    #[test]
    fn test_href_parses_back() {
        for route in [
            AppRoute::Cover,
            AppRoute::Catalogue,
            AppRoute::Grid,
            AppRoute::Product("film-etirable".to_string()),
        ] {
            assert_eq!(AppRoute::from_search(&route.href()), route);
        }
    }
}
