//! Sidebar Component
//!
//! Vertical rail with activity icons and the copyright line.

use leptos::*;

const ACTIVITY_ICONS: [&str; 4] = ["🧘", "🏊", "🚴", "🏋"];

/// Vertical sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__icons">
                {ACTIVITY_ICONS.iter().map(|icon| view! {
                    <span class="sidebar__icon">{*icon}</span>
                }).collect_view()}
            </div>
            <p class="sidebar__copyright">"Copyright, SportSee 2020"</p>
        </aside>
    }
}
