use crate::layout::global_context::use_catalogue;
use crate::shared::components::catalog_sheet::{CatalogSheet, SHEET_TOC};
use contracts::projections::p900_category_index::toc_entries;
use leptos::prelude::*;

/// Page 1 of the book. Rows come from the category index, so page numbers
/// follow the data.
#[component]
pub fn TocSheet() -> impl IntoView {
    let ctx = use_catalogue();
    let entries = ctx.index.with_value(|index| {
        ctx.config
            .with_value(|config| toc_entries(index, &config.categories))
    });

    view! {
        <CatalogSheet kind=SHEET_TOC>
            <div class="toc__banner">
                <img src="/images/page_table_matier.png" alt="Ambiance FoxyTable" />
            </div>
            <section class="toc__content">
                <h1 class="toc__title">"Table des" <br /> "matières"</h1>
                <div class="toc__rule"></div>
                <ol class="toc__list">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let target = entry.target_index;
                            let pages = entry.pages_label();
                            view! {
                                <li class="toc__item">
                                    <button class="toc__link" on:click=move |_| ctx.jump_to(target)>
                                        <span
                                            class="toc__dot"
                                            aria-hidden="true"
                                            style=format!("background: {};", entry.color)
                                        ></span>
                                        <span class="toc__label">{entry.key}</span>
                                    </button>
                                    <span class="toc__pages">{pages}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        </CatalogSheet>
    }
}
