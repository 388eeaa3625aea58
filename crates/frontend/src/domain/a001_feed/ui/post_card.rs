use crate::shared::date_utils::format_relative;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a001_post::Post;
use leptos::prelude::*;
use thaw::Card;
use uuid::Uuid;

#[component]
pub fn PostCard(post: Post, #[prop(into)] on_like: Callback<Uuid>) -> impl IntoView {
    let id = post.id;
    let byline = match &post.author_instrument {
        Some(instrument) => format!("{} · {}", post.author, instrument),
        None => post.author.clone(),
    };

    view! {
        <Card>
            <article class="post" data-post-id=id.to_string()>
                <header class="post__header">
                    <span class="post__author">{byline}</span>
                    <time class="post__time" datetime=post.posted_at.to_rfc3339()>
                        {format_relative(post.posted_at, Utc::now())}
                    </time>
                </header>
                <p class="post__body">{post.body.clone()}</p>
                <footer class="post__footer">
                    <button
                        type="button"
                        class="post__like"
                        class:post__like--active=post.liked
                        on:click=move |_| on_like.run(id)
                    >
                        {icon("heart")}
                        <span>{post.likes}</span>
                    </button>
                </footer>
            </article>
        </Card>
    }
}
