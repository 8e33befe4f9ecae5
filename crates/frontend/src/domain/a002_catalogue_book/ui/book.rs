use super::toc::TocSheet;
use crate::domain::a001_catalogue_product::ui::sheets::render_by_template;
use crate::layout::global_context::use_catalogue;
use crate::layout::tab_rail::TabRail;
use crate::layout::toolbar::BookToolbar;
use crate::shared::components::catalog_sheet::BlankSheet;
use crate::shared::input::use_arrow_keys;
use crate::shared::viewport::use_spread_viewport;
use contracts::domain::a002_catalogue_book::Page;
use contracts::shared::navigation::{NavigationKey, SwipeTracker};
use leptos::ev::TouchEvent;
use leptos::prelude::*;
use web_sys::TouchList;

fn first_touch_x(touches: &TouchList) -> Option<f64> {
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

/// Книга каталога: один лист или разворот из двух, в зависимости от ширины окна.
#[component]
pub fn CatalogueBook() -> impl IntoView {
    let ctx = use_catalogue();
    let (viewport, threshold_px) = ctx.config.with_value(|config| {
        (config.viewport.clone(), config.gestures.swipe_threshold_px)
    });

    use_spread_viewport(
        &viewport,
        Callback::new(move |is_wide: bool| ctx.set_viewport_spread(is_wide)),
    );
    use_arrow_keys(Callback::new(move |key: NavigationKey| ctx.apply(key.command())));

    let swipe = RwSignal::new(SwipeTracker::new(threshold_px));
    let on_touch_start = move |ev: TouchEvent| match first_touch_x(&ev.touches()) {
        Some(x) => {
            swipe.update_untracked(|tracker| tracker.start(x));
        }
        None => {
            swipe.update_untracked(|tracker| tracker.cancel());
        }
    };
    let on_touch_end = move |ev: TouchEvent| {
        let direction = match first_touch_x(&ev.changed_touches()) {
            Some(x) => swipe
                .try_update_untracked(|tracker| tracker.finish(x))
                .flatten(),
            None => {
                swipe.update_untracked(|tracker| tracker.cancel());
                None
            }
        };
        if let Some(direction) = direction {
            ctx.apply(direction.command());
        }
    };
    let on_touch_cancel = move |_: TouchEvent| {
        swipe.update_untracked(|tracker| tracker.cancel());
    };

    let visible = Memo::new(move |_| ctx.visible_pages());
    let sheets_class = move || {
        if visible.with(|v| v.spread) {
            "book__sheets book__sheets--spread"
        } else {
            "book__sheets"
        }
    };

    view! {
        <div class="book">
            <BookToolbar />
            <div class="book__body">
                <div
                    class=sheets_class
                    on:touchstart=on_touch_start
                    on:touchend=on_touch_end
                    on:touchcancel=on_touch_cancel
                >
                    {move || {
                        let pages = visible.get();
                        let right = if pages.spread {
                            Some(match pages.right {
                                Some(page) => render_page(page),
                                None => view! { <BlankSheet /> }.into_any(),
                            })
                        } else {
                            None
                        };
                        view! {
                            {render_page(pages.left)}
                            {right}
                        }
                    }}
                </div>
                <TabRail />
            </div>
        </div>
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Toc => view! { <TocSheet /> }.into_any(),
        Page::Product(product) => render_by_template(product),
    }
}
