use contracts::shared::navigation::NavigationKey;
use leptos::prelude::*;

/// Global ArrowLeft / ArrowRight handling for the book.
pub fn use_arrow_keys(on_key: Callback<NavigationKey>) {
    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if let Some(key) = NavigationKey::from_key(&ev.key()) {
            ev.prevent_default();
            on_key.run(key);
        }
    });
}
