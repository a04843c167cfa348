//! Dashboard Page
//!
//! Loads the four data categories for the routed user and renders the
//! greeting, charts and nutrition summary.

use leptos::*;
use leptos_router::*;

use crate::components::{
    ActivityChart, KeyDataCard, Loading, PerformanceChart, ScoreChart, ServiceError,
    SessionsChart,
};
use crate::config::AppConfig;
use crate::pages::NotFound;
use crate::state::dashboard::{load_dashboard, DashboardData, DashboardView};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided");
    let params = use_params_map();
    let (dashboard, set_dashboard) = create_signal(DashboardView::Loading);
    // Each load gets a generation token; a resolution belonging to a
    // superseded load is discarded instead of clobbering newer state.
    let generation = store_value(0u64);

    create_effect(move |_| {
        let user_id = params.with(|params| {
            params
                .get("user_id")
                .and_then(|value| value.parse::<u32>().ok())
        });

        let current = generation.with_value(|generation| generation + 1);
        generation.set_value(current);
        set_dashboard.set(DashboardView::Loading);

        let Some(user_id) = user_id else {
            set_dashboard.set(DashboardView::NotFound);
            return;
        };

        let config = config.clone();
        spawn_local(async move {
            let result = load_dashboard(&config, user_id).await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            match result {
                Ok(Some(data)) => set_dashboard.set(DashboardView::Loaded(Box::new(data))),
                Ok(None) => set_dashboard.set(DashboardView::NotFound),
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("dashboard load failed: {}", error).into(),
                    );
                    set_dashboard.set(DashboardView::ServerError);
                }
            }
        });
    });

    view! {
        {move || match dashboard.get() {
            DashboardView::Loading => view! { <Loading /> }.into_view(),
            DashboardView::NotFound => view! { <NotFound /> }.into_view(),
            DashboardView::ServerError => view! { <ServiceError /> }.into_view(),
            DashboardView::Loaded(data) => view! { <DashboardContent data=*data /> }.into_view(),
        }}
    }
}

/// Greeting, chart grid and nutrition summary for one loaded user
#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let DashboardData {
        profile,
        activity,
        sessions,
        performance,
    } = data;
    let key_data = profile.key_data.clone();

    view! {
        <div class="dashboard">
            <Greeting first_name=profile.first_name.clone() />
            <div class="dashboard__grid">
                <div class="dashboard__charts">
                    <ActivityChart data=activity />
                    <div class="dashboard__chart-row">
                        <SessionsChart data=sessions />
                        <PerformanceChart data=performance />
                        <ScoreChart score=profile.score />
                    </div>
                </div>
                <aside class="dashboard__keydata">
                    {key_data.into_iter().map(|entry| view! {
                        <KeyDataCard entry=entry />
                    }).collect_view()}
                </aside>
            </div>
        </div>
    }
}

/// Personalized greeting above the charts
#[component]
fn Greeting(first_name: String) -> impl IntoView {
    view! {
        <div class="greeting">
            <h1>"Bonjour " <span class="greeting__name">{first_name}</span></h1>
            <p>"Félicitation ! Vous avez explosé vos objectifs hier 👏"</p>
        </div>
    }
}
