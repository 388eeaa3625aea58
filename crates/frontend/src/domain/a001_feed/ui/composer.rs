use crate::shared::components::ui::{Button, Textarea};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a001_post::{NewPost, Post, MAX_POST_LEN};
use leptos::prelude::*;

/// New post box. A valid draft is handed to `on_publish` and the box is
/// cleared; an invalid one shows the validation message instead.
#[component]
pub fn Composer(
    author: String,
    author_instrument: Option<String>,
    #[prop(into)] on_publish: Callback<Post>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let remaining = Memo::new(move |_| {
        draft.with(|body| {
            NewPost {
                body: body.clone(),
            }
            .remaining()
        })
    });

    let submit = Callback::new(move |_| {
        let new_post = NewPost {
            body: draft.get_untracked(),
        };
        match new_post.publish(&author, author_instrument.clone(), Utc::now()) {
            Ok(post) => {
                log::info!("post {} published ({} chars)", post.id, post.body.chars().count());
                on_publish.run(post);
                draft.set(String::new());
                error.set(None);
            }
            Err(e) => {
                log::debug!("post rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="composer">
            <Textarea
                id="composer-body"
                value=draft
                on_input=Callback::new(move |value: String| {
                    draft.set(value);
                    error.set(None);
                })
                placeholder="Share a gig, a riff, or a call for bandmates"
                error=Signal::derive(move || error.get())
                rows=3
            />
            <div class="composer__footer">
                <span
                    class="composer__counter"
                    class:composer__counter--over=move || remaining.get() < 0
                    title=format!("Up to {} characters", MAX_POST_LEN)
                >
                    {move || remaining.get()}
                </span>
                <Button
                    on_click=submit
                    disabled=Signal::derive(move || Some(draft.with(|body| body.trim().is_empty())))
                >
                    {icon("send")} " Post"
                </Button>
            </div>
        </div>
    }
}
