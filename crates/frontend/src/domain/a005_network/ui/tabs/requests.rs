//! Incoming connection requests. Decisions are kept in page state only.

use crate::domain::a005_network::model::{decide, pending_count};
use crate::shared::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::shared::components::MusicianCard;
use crate::shared::icons::icon;
use crate::shared::number_format::pluralize;
use contracts::domain::a004_musician::{ConnectionRequest, RequestDecision};
use leptos::prelude::*;

/// Records the user's answer to request `id`. Returns false if it was no
/// longer pending.
pub fn respond(
    requests: RwSignal<Vec<ConnectionRequest>>,
    id: &str,
    decision: RequestDecision,
) -> bool {
    let applied = requests
        .try_update(|list| decide(list, id, decision))
        .unwrap_or(false);
    if applied {
        log::info!("connection request {} {:?}", id, decision);
    } else {
        log::warn!("connection request {} is not pending", id);
    }
    applied
}

#[component]
pub fn RequestsTab(requests: RwSignal<Vec<ConnectionRequest>>) -> impl IntoView {

    view! {
        <p class="tab-view__intro">
            {move || requests.with(|list| {
                match pending_count(list) {
                    0 => "No pending requests".to_string(),
                    n => format!("{} waiting for you", pluralize(n as u64, "request", "requests")),
                }
            })}
        </p>
        <div class="card-grid">
            <For
                each=move || requests.get()
                key=|request| (request.id.clone(), request.decision)
                children=move |request| {
                    let id = request.id.clone();
                    let accept_id = id.clone();
                    let dismiss_id = id.clone();
                    let decision = request.decision;
                    let message = request.message.clone();
                    view! {
                        <div class="request" data-request-id=id>
                            {message.map(|m| view! { <blockquote class="request__message">{m}</blockquote> })}
                            <MusicianCard musician=request.from>
                                {match decision {
                                    RequestDecision::Pending => {
                                        view! {
                                            <Button
                                                size=ButtonSize::Small
                                                on_click=Callback::new(move |_| { respond(requests, &accept_id, RequestDecision::Accepted); })
                                            >
                                                {icon("check")} " Accept"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                size=ButtonSize::Small
                                                on_click=Callback::new(move |_| { respond(requests, &dismiss_id, RequestDecision::Dismissed); })
                                            >
                                                {icon("x")} " Dismiss"
                                            </Button>
                                        }.into_any()
                                    }
                                    RequestDecision::Accepted => view! {
                                        <span class="request__status request__status--accepted">"Connected"</span>
                                    }.into_any(),
                                    RequestDecision::Dismissed => view! {
                                        <span class="request__status">"Dismissed"</span>
                                    }.into_any(),
                                }}
                            </MusicianCard>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_network::model::pending_requests;

    #[test]
    fn test_respond_updates_page_state() {
        let owner = Owner::new();
        owner.with(|| {
            let requests = RwSignal::new(pending_requests());

            assert!(respond(requests, "r-702", RequestDecision::Dismissed));
            assert!(!respond(requests, "r-702", RequestDecision::Accepted));

            requests.with_untracked(|list| {
                assert_eq!(list[1].decision, RequestDecision::Dismissed);
                assert_eq!(pending_count(list), 2);
            });
        });
    }
}
