use crate::layout::global_context::use_catalogue;
use leptos::prelude::*;

/// Category pill in the top-right corner of a product sheet.
///
/// `None` shows the uncategorized label.
#[component]
pub fn PageBadge(#[prop(into)] category: Option<String>) -> impl IntoView {
    let ctx = use_catalogue();
    let (label, color) = ctx.config.with_value(|config| {
        let categories = &config.categories;
        let key = category
            .as_deref()
            .unwrap_or(categories.uncategorized_label.as_str())
            .to_string();
        (categories.label_for(&key), categories.color_for(&key).to_string())
    });

    view! {
        <div class="page-badge">
            <span
                class="page-badge__label"
                style=format!("background: {0}1A; color: {0}; border-color: {0}55;", color)
            >
                {label}
            </span>
        </div>
    }
}

