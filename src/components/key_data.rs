//! Key Data Card
//!
//! One nutrition total with icon, formatted value and label.

use leptos::*;

use crate::format::{format_thousands, KeyDataEntry};

/// Nutrition summary card
#[component]
pub fn KeyDataCard(entry: KeyDataEntry) -> impl IntoView {
    view! {
        <div class="keydata-card">
            <img class="keydata-card__icon" src=entry.icon alt=format!("{} icon", entry.label) />
            <div class="keydata-card__info">
                <p class="keydata-card__value">
                    {format!("{}{}", format_thousands(entry.value), entry.unit)}
                </p>
                <p class="keydata-card__label">{entry.label}</p>
            </div>
        </div>
    }
}
