use super::tabs::{LibraryTab, PlaylistsTab, UploadsTab};
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::icons::Icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_TABBED;
use crate::shared::tabs::{unknown_tab, Tab, TabConfigErrorBox, TabView, TabViewVm};
use contracts::shared::tabs::TabConfigError;
use leptos::prelude::*;

pub fn music_tabs() -> Vec<Tab> {
    vec![
        Tab::new("library", "Library", Icon("disc")),
        Tab::new("playlists", "Playlists", Icon("list")),
        Tab::new("uploads", "Uploads", Icon("upload")),
    ]
}

pub fn music_tab_view(initial: &str) -> Result<TabViewVm, TabConfigError> {
    TabViewVm::new(music_tabs(), initial)
}

pub fn music_router(id: &str) -> AnyView {
    match id {
        "library" => view! { <LibraryTab /> }.into_any(),
        "playlists" => view! { <PlaylistsTab /> }.into_any(),
        "uploads" => view! { <UploadsTab /> }.into_any(),
        other => unknown_tab(other),
    }
}

#[component]
pub fn MusicPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let body = match music_tab_view(&config.pages.music) {
        Ok(vm) => view! { <TabView vm=vm router=music_router /> }.into_any(),
        Err(error) => view! { <TabConfigErrorBox page="music" error=error /> }.into_any(),
    };

    view! {
        <PageFrame page_id="a004_music--tabbed" category=PAGE_CAT_TABBED>
            <PageHeader title="Music" />
            <div class="page__content">{body}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_reselect_is_idempotent() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = music_tab_view("library").unwrap();
            vm.select("playlists");
            vm.select("playlists");
            assert_eq!(vm.current(), "playlists");
            assert!(vm.is_active("playlists"));
            assert!(!vm.is_active("library"));
        });
    }
}
