use super::{Composer, PostCard};
use crate::domain::a001_feed::model::{prepend, sample_posts, toggle_like};
use crate::shared::components::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FEED;
use chrono::Utc;
use contracts::domain::a001_post::Post;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn FeedPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let posts = RwSignal::new(sample_posts(Utc::now()));

    let on_publish = Callback::new(move |post: Post| posts.update(|list| prepend(list, post)));
    let on_like = Callback::new(move |id: Uuid| {
        if !posts.try_update(|list| toggle_like(list, id)).unwrap_or(false) {
            log::warn!("like on post {} which is no longer in the feed", id);
        }
    });

    view! {
        <PageFrame page_id="a001_feed--feed" category=PAGE_CAT_FEED>
            <PageHeader title="Feed" />
            <div class="page__content">
                <Composer
                    author=config.profile.display_name.clone()
                    author_instrument=Some(config.profile.instrument.clone())
                    on_publish=on_publish
                />
                <div class="post-list">
                    <For
                        each=move || posts.get()
                        key=|post| (post.id, post.liked)
                        children=move |post| view! { <PostCard post=post on_like=on_like /> }
                    />
                </div>
            </div>
        </PageFrame>
    }
}
