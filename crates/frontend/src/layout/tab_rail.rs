use super::global_context::use_catalogue;
use leptos::prelude::*;

/// Вертикальная лента вкладок категорий справа от книги
#[component]
pub fn TabRail() -> impl IntoView {
    let ctx = use_catalogue();
    let active = Memo::new(move |_| ctx.active_category());

    let tabs = ctx.tabs.get_value();
    if tabs.is_empty() {
        return ().into_any();
    }

    view! {
        <nav class="tab-rail" aria-label="Catégories">
            {tabs
                .into_iter()
                .map(|tab| {
                    let key = tab.key.clone();
                    let target = tab.target_index;
                    let log_key = tab.key.clone();
                    let class = move || {
                        if active.get().as_deref() == Some(key.as_str()) {
                            "tab-rail__tab tab-rail__tab--active"
                        } else {
                            "tab-rail__tab"
                        }
                    };
                    view! {
                        <button
                            class=class
                            style=format!("--tab-color: {};", tab.color)
                            title=tab.key.clone()
                            on:click=move |_| {
                                leptos::logging::log!("🔖 Tab {} -> page {}", log_key, target + 1);
                                ctx.jump_to(target);
                            }
                        >
                            <span class="tab-rail__label">{tab.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
    .into_any()
}
