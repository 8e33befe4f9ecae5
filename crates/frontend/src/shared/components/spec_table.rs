use crate::shared::icons::icon;
use contracts::domain::a001_catalogue_product::{SpecRow, VariantRow};
use leptos::prelude::*;

/// Two-column label / value table of a standard sheet.
#[component]
pub fn SpecsTable(rows: Vec<SpecRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <p class="specs-table__empty">"Aucune caractéristique renseignée."</p>
        }
        .into_any();
    }

    view! {
        <table class="specs-table">
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <th scope="row">{row.label}</th>
                            <td>{row.value}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

/// Reference matrix of the special sheets: one line per reference, with
/// packing quantities per bag, carton and pallet.
#[component]
pub fn MatrixTable(rows: Vec<VariantRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <p class="matrix-table__empty">"Références sur demande."</p>
        }
        .into_any();
    }

    view! {
        <table class="matrix-table">
            <thead>
                <tr>
                    <th>"Référence"</th>
                    <th>"Format"</th>
                    <th>"Divers"</th>
                    <th title="Sachet">{icon("bag")}</th>
                    <th title="Carton">{icon("box")}</th>
                    <th title="Palette">{icon("pallet")}</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td class="matrix-table__reference">{row.reference}</td>
                            <td>{row.format}</td>
                            <td>{row.divers}</td>
                            <td class="matrix-table__qty">{row.sac}</td>
                            <td class="matrix-table__qty">{row.carton}</td>
                            <td class="matrix-table__qty">{row.palette}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
