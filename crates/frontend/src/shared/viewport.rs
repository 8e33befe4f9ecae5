//! Spread / single mode from a `matchMedia` query.

use contracts::shared::config::ViewportConfig;
use contracts::shared::navigation::{is_wide_viewport, media_query};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Reports whether the viewport is wide enough for two sheets.
///
/// Called once immediately, then after every `change` of the media query,
/// debounced by `resize_debounce_ms`.
pub fn use_spread_viewport(viewport: &ViewportConfig, on_change: Callback<bool>) {
    let query = media_query(viewport.spread_breakpoint_px);
    let Some(window) = web_sys::window() else {
        on_change.run(false);
        return;
    };
    let Some(mql) = window.match_media(&query).ok().flatten() else {
        // No live updates, one reading of the current width only.
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        log::warn!("matchMedia unavailable for {}, width {}px", query, width);
        on_change.run(is_wide_viewport(width, viewport.spread_breakpoint_px));
        return;
    };

    on_change.run(mql.matches());

    let debounce_ms = viewport.resize_debounce_ms;
    // Replacing the pending timeout drops (cancels) the previous one.
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let watched = mql.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        let watched = watched.clone();
        if debounce_ms == 0 {
            on_change.run(watched.matches());
            return;
        }
        let timeout = Timeout::new(debounce_ms, move || {
            on_change.run(watched.matches());
        });
        pending.borrow_mut().replace(timeout);
    }) as Box<dyn FnMut(_)>);

    if let Err(e) = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to watch {}: {:?}", query, e);
    }
    closure.forget();
}
