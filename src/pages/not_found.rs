//! Not Found Page

use leptos::*;
use leptos_router::*;

/// 404 page, also rendered when the dashboard targets an unknown user
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="error404">
            <h1 class="error404__title">"404"</h1>
            <p class="error404__message">"Oups! La page que vous recherchez n'existe pas."</p>
            <A href="/" class="error404__back">
                "Retour à la page d'accueil"
            </A>
        </div>
    }
}
