use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MARKETING;
use leptos::prelude::*;
use leptos_router::components::A;

struct Highlight {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "users",
        title: "Find your band",
        text: "Meet players near you by instrument, genre and the people you already know.",
    },
    Highlight {
        icon: "calendar",
        title: "Never miss a session",
        text: "Open jams, gigs and workshops from the scenes you follow.",
    },
    Highlight {
        icon: "music",
        title: "Share your sound",
        text: "Upload demos, build set lists and see who is listening.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    view! {
        <PageFrame page_id="landing--marketing" category=PAGE_CAT_MARKETING>
            <section class="landing__hero">
                <h1 class="landing__title">{config.app.title.clone()}</h1>
                <p class="landing__tagline">{config.app.tagline.clone()}</p>
                <div class="landing__cta">
                    <A href="/signup" attr:class="button button--primary">"Join now"</A>
                    <A href="/signin" attr:class="button button--secondary">"Sign in"</A>
                </div>
            </section>
            <section class="landing__highlights">
                {HIGHLIGHTS.iter().map(|h| view! {
                    <div class="landing__highlight">
                        <span class="landing__highlight-icon">{icon(h.icon)}</span>
                        <h3>{h.title}</h3>
                        <p>{h.text}</p>
                    </div>
                }).collect_view()}
            </section>
        </PageFrame>
    }
}
