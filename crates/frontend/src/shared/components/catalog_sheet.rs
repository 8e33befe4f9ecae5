//! CatalogSheet: the A4 frame every page of the book is rendered into.
//!
//! The root element carries `data-sheet-kind`, e.g. `toc`, `product`,
//! `blank`, so print styles and DOM inspection can tell sheets apart.

use leptos::prelude::*;

pub const SHEET_TOC: &str = "toc";
pub const SHEET_PRODUCT: &str = "product";
pub const SHEET_BLANK: &str = "blank";
pub const SHEET_COVER: &str = "cover";

/// A4 sheet (210 × 297) with the brand footer.
#[component]
pub fn CatalogSheet(
    /// One of the SHEET_* constants.
    kind: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        format!("catalog-sheet catalog-sheet--{}", kind)
    } else {
        format!("catalog-sheet catalog-sheet--{} {}", kind, class)
    };

    view! {
        <section class=full_class data-sheet-kind=kind>
            <div class="catalog-sheet__body">{children()}</div>
            <footer class="catalog-sheet__footer">
                <img class="catalog-sheet__logo" src="/images/Logo_foxy.png" alt="FoxyTable" loading="lazy" />
                <span class="catalog-sheet__site">"foxytable.com"</span>
            </footer>
        </section>
    }
}

/// Empty right-hand sheet, keeps the spread two sheets wide.
#[component]
pub fn BlankSheet() -> impl IntoView {
    view! {
        <CatalogSheet kind=SHEET_BLANK>
            <div class="blank-sheet" aria-hidden="true"></div>
        </CatalogSheet>
    }
}
