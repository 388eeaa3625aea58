use super::nav_strip::NavStrip;
use super::view_model::TabViewVm;
use leptos::prelude::*;

/// Navigation strip over a body produced by `router` for the current
/// selection. Both read the same selection signal.
///
/// `router` must be pure: the same id always yields the same content. It
/// should end in a catch-all arm so an id it does not know still renders.
#[component]
pub fn TabView<F>(vm: TabViewVm, router: F) -> impl IntoView
where
    F: Fn(&str) -> AnyView + Send + Sync + 'static,
{
    let current = vm.selection();
    let tabs = vm.tabs.clone();
    let on_select = select_intent(vm);

    view! {
        <div class="tab-view">
            <NavStrip tabs=tabs selection=current on_select=on_select />
            <div class="tab-view__body" role="tabpanel">
                {move || current.with(|id| router(id))}
            </div>
        </div>
    }
}

/// Strip activations go straight to the view model; the strip itself never
/// holds a selection.
fn select_intent(vm: TabViewVm) -> Callback<String> {
    Callback::new(move |id: String| vm.select(&id))
}

/// Body shown for an id the page router has no arm for.
pub fn unknown_tab(id: &str) -> AnyView {
    view! {
        <div class="placeholder">
            {format!("Nothing to show for \"{}\"", id)}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icons::Icon;
    use crate::shared::tabs::Tab;
    use contracts::shared::tabs::nav_items;

    fn events_vm() -> TabViewVm {
        TabViewVm::new(
            vec![
                Tab::new("upcoming", "Upcoming", Icon("calendar")),
                Tab::new("events", "My Events", Icon("star")),
                Tab::new("discover", "Discover", Icon("compass")),
            ],
            "upcoming",
        )
        .unwrap()
    }

    fn highlighted(vm: &TabViewVm) -> Vec<String> {
        vm.selection().with_untracked(|current| {
            nav_items(vm.tabs.as_ref(), current)
                .into_iter()
                .filter(|item| item.active)
                .map(|item| item.tab.label.clone())
                .collect()
        })
    }

    #[test]
    fn test_strip_and_body_follow_one_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = events_vm();
            let router = |id: &str| format!("body:{}", id);
            let on_select = select_intent(vm.clone());

            on_select.run("discover".to_string());

            assert_eq!(highlighted(&vm), ["Discover"]);
            assert_eq!(vm.selection().with_untracked(|id| router(id)), "body:discover");
        });
    }

    #[test]
    fn test_unknown_intent_highlights_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = events_vm();
            select_intent(vm.clone()).run("archived".to_string());

            assert!(highlighted(&vm).is_empty());
            assert_eq!(vm.current(), "archived");
        });
    }
}
