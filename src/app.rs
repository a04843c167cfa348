//! App Root Component
//!
//! Routing shell, layout chrome and startup configuration.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Sidebar};
use crate::config::AppConfig;
use crate::pages::{Dashboard, Home, NotFound};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Resolved once at startup; data access receives it through context.
    provide_context(AppConfig::resolve());

    view! {
        <Router>
            <div class="app">
                <Header />
                <div class="app__body">
                    <Sidebar />
                    <main class="app__content">
                        <Routes>
                            <Route path="/" view=Home />
                            <Route path="/:user_id" view=Dashboard />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
