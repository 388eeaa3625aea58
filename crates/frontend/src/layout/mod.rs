pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::{Left, Sidebar};
use top_header::TopHeader;

/// Sections reachable from the top bar: (path, label, icon).
pub const SECTIONS: [(&str, &str, &str); 5] = [
    ("/feed", "Feed", "home"),
    ("/discover", "Discover", "compass"),
    ("/events", "Events", "calendar"),
    ("/music", "Music", "music"),
    ("/network", "Network", "users"),
];

/// Chrome of the signed-in pages.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |  (Left)   |                              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Left>
                    <Sidebar />
                </Left>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
