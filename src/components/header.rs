//! Header Component
//!
//! Top navigation bar with logo and section labels.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <A href="/" class="header__brand">
                <span class="header__logo">"🏃"</span>
                <span class="header__name">"SportSee"</span>
            </A>
            <nav class="header__nav">
                <A href="/" class="header__link">"Accueil"</A>
                <span class="header__link">"Profil"</span>
                <span class="header__link">"Réglage"</span>
                <span class="header__link">"Communauté"</span>
            </nav>
        </header>
    }
}
