//! Home Page
//!
//! Entry prompt asking the visitor to pick a profile.

use leptos::*;
use leptos_router::*;

use crate::api::mock;

/// Landing page listing the seeded profiles as entry points
#[component]
pub fn Home() -> impl IntoView {
    let profiles = mock::seeded_profiles();

    view! {
        <div class="home">
            <h1>"Bienvenue sur SportSee"</h1>
            <p>"Choisissez un profil pour accéder à son tableau de bord."</p>
            <ul class="home__profiles">
                {profiles.into_iter().map(|(id, first_name)| view! {
                    <li>
                        <A href=format!("/{}", id) class="home__profile-link">
                            {first_name}
                        </A>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
