use crate::shared::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Connect" action on a musician card. Sending is local only: the button
/// flips to "Requested" and can be clicked again to withdraw.
#[component]
pub fn ConnectButton(musician_name: String) -> impl IntoView {
    let requested = RwSignal::new(false);

    let on_click = Callback::new(move |_| {
        requested.update(|r| *r = !*r);
        if requested.get_untracked() {
            log::info!("connection request sent to {}", musician_name);
        } else {
            log::info!("connection request to {} withdrawn", musician_name);
        }
    });

    view! {
        <Button
            variant=Signal::derive(move || {
                Some(if requested.get() {
                    ButtonVariant::Secondary
                } else {
                    ButtonVariant::Primary
                })
            })
            size=ButtonSize::Small
            on_click=on_click
        >
            {move || if requested.get() {
                view! { {icon("check")} " Requested" }.into_any()
            } else {
                view! { {icon("user-plus")} " Connect" }.into_any()
            }}
        </Button>
    }
}
