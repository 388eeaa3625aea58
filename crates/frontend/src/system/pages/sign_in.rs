use super::field_error;
use crate::shared::components::ui::{Button, Input};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::system::auth::{FieldError, SignInForm};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = SignInForm {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                log::info!("signed in as {}", form.email);
                errors.set(Vec::new());
                navigate("/feed", Default::default());
            }
            Err(list) => {
                log::debug!("sign-in rejected: {} field error(s)", list.len());
                errors.set(list);
            }
        }
    };

    view! {
        <PageFrame page_id="sign_in--form" category=PAGE_CAT_FORM>
            <form class="auth-form" on:submit=on_submit novalidate>
                <h1 class="auth-form__title">"Welcome back"</h1>
                <Input
                    id="signin-email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value=email
                    on_input=Callback::new(move |v: String| email.set(v))
                    error=field_error(errors, "email")
                />
                <Input
                    id="signin-password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                    on_input=Callback::new(move |v: String| password.set(v))
                    error=field_error(errors, "password")
                />
                <Button submit=true>"Sign in"</Button>
                <p class="auth-form__switch">
                    "New here? " <A href="/signup">"Create an account"</A>
                </p>
            </form>
        </PageFrame>
    }
}
