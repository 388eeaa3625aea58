//! Side panel: who is signed in, plus shortcuts into the tabbed pages

use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a004_musician::initials;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

/// (path, label, icon)
const SHORTCUTS: [(&str, &str, &str); 4] = [
    ("/feed", "Write a post", "send"),
    ("/events", "Upcoming gigs", "calendar"),
    ("/network", "Connection requests", "user-plus"),
    ("/music", "Your uploads", "upload"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let profile = config.profile;

    view! {
        <div class="sidebar">
            <Card>
                <div class="profile-card">
                    <div class="profile-card__avatar" aria-hidden="true">
                        {initials(&profile.display_name)}
                    </div>
                    <div class="profile-card__name">{profile.display_name.clone()}</div>
                    <div class="profile-card__meta">
                        {format!("{} · {}", profile.instrument, profile.city)}
                    </div>
                </div>
            </Card>
            <nav class="sidebar__shortcuts">
                {SHORTCUTS.iter().map(|(path, label, icon_name)| view! {
                    <A href=*path attr:class="sidebar__item">
                        {icon(icon_name)}
                        <span>{*label}</span>
                    </A>
                }).collect_view()}
            </nav>
        </div>
    }
}
