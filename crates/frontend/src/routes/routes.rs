use crate::domain::a001_feed::ui::FeedPage;
use crate::domain::a002_discover::ui::DiscoverPage;
use crate::domain::a003_events::ui::EventsPage;
use crate::domain::a004_music::ui::MusicPage;
use crate::domain::a005_network::ui::NetworkPage;
use crate::layout::Shell;
use crate::system::pages::{LandingPage, NotFoundPage, SignInPage, SignUpPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Page routing. A page's selected tab lives in the page, never in the URL.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/signin") view=SignInPage />
                <Route path=path!("/signup") view=SignUpPage />
                <Route path=path!("/feed") view=|| view! { <Shell><FeedPage /></Shell> } />
                <Route path=path!("/discover") view=|| view! { <Shell><DiscoverPage /></Shell> } />
                <Route path=path!("/events") view=|| view! { <Shell><EventsPage /></Shell> } />
                <Route path=path!("/music") view=|| view! { <Shell><MusicPage /></Shell> } />
                <Route path=path!("/network") view=|| view! { <Shell><NetworkPage /></Shell> } />
            </Routes>
        </Router>
    }
}
