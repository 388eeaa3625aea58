pub mod landing;
pub mod not_found;
pub mod sign_in;
pub mod sign_up;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;

use contracts::system::auth::{error_for, FieldError};
use leptos::prelude::*;

/// Message shown under `field`, derived from the last submit's errors.
fn field_error(errors: RwSignal<Vec<FieldError>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|list| error_for(list, field)))
}
