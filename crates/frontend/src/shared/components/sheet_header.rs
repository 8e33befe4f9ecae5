use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title block at the top of a product sheet
#[component]
pub fn SheetHeader(
    #[prop(into)] title: String,

    subtitle: Option<String>,

    /// e.g. "-20°C / +100°C"
    temperature: Option<String>,
) -> impl IntoView {
    view! {
        <div class="sheet-header">
            <div class="sheet-header__text">
                <h1 class="sheet-header__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="sheet-header__subtitle">{s}</p> })}
                <div class="sheet-header__rule"></div>
            </div>
            {temperature.map(|t| view! {
                <div class="sheet-header__temperature">
                    {icon("thermometer")}
                    <span>{t}</span>
                </div>
            })}
        </div>
    }
}
