use super::field_error;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::system::auth::{FieldError, SignUpForm, MIN_PASSWORD_LEN};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let instrument = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let instrument = instrument.get_untracked().trim().to_string();
        let form = SignUpForm {
            display_name: display_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            instrument: (!instrument.is_empty()).then_some(instrument),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accept_terms: accept_terms.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                log::info!(
                    "account created for {} ({})",
                    form.display_name,
                    form.instrument.as_deref().unwrap_or("no instrument")
                );
                errors.set(Vec::new());
                navigate("/feed", Default::default());
            }
            Err(list) => {
                log::debug!("sign-up rejected: {} field error(s)", list.len());
                errors.set(list);
            }
        }
    };

    view! {
        <PageFrame page_id="sign_up--form" category=PAGE_CAT_FORM>
            <form class="auth-form" on:submit=on_submit novalidate>
                <h1 class="auth-form__title">"Create your account"</h1>
                <Input
                    id="signup-name"
                    label="Display name"
                    autocomplete="name"
                    value=display_name
                    on_input=Callback::new(move |v: String| display_name.set(v))
                    error=field_error(errors, "display_name")
                />
                <Input
                    id="signup-email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value=email
                    on_input=Callback::new(move |v: String| email.set(v))
                    error=field_error(errors, "email")
                />
                <Input
                    id="signup-instrument"
                    label="Primary instrument (optional)"
                    placeholder="e.g. Bass"
                    value=instrument
                    on_input=Callback::new(move |v: String| instrument.set(v))
                />
                <Input
                    id="signup-password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    placeholder=format!("At least {} characters", MIN_PASSWORD_LEN)
                    value=password
                    on_input=Callback::new(move |v: String| password.set(v))
                    error=field_error(errors, "password")
                />
                <Input
                    id="signup-confirm"
                    label="Confirm password"
                    input_type="password"
                    autocomplete="new-password"
                    value=confirm_password
                    on_input=Callback::new(move |v: String| confirm_password.set(v))
                    error=field_error(errors, "confirm_password")
                />
                <Checkbox
                    id="signup-terms"
                    label="I agree to the community guidelines"
                    checked=accept_terms
                    on_change=Callback::new(move |v: bool| accept_terms.set(v))
                    error=field_error(errors, "accept_terms")
                />
                <Button submit=true>"Create account"</Button>
                <p class="auth-form__switch">
                    "Already a member? " <A href="/signin">"Sign in"</A>
                </p>
            </form>
        </PageFrame>
    }
}
