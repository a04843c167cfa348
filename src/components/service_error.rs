//! Service Error Banner

use leptos::*;

/// Generic failure banner shown when any category fetch fails
#[component]
pub fn ServiceError() -> impl IntoView {
    view! {
        <div class="service-error" role="alert">
            <p class="service-error__title">"Service indisponible"</p>
            <p class="service-error__message">
                "Les données ne peuvent pas être récupérées pour le moment. Veuillez réessayer plus tard."
            </p>
        </div>
    }
}
