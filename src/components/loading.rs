//! Loading Component

use leptos::*;

/// Full-page loading spinner shown while the data categories load
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner" />
            <p class="loading__label">"Chargement..."</p>
        </div>
    }
}
