use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

/// Row actions on cards use `Small`; form submits keep `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Medium,
    Small,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Small => "button--small",
        }
    }
}

fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    match size.class() {
        "" => format!("button {}", variant.class()),
        size_class => format!("button {} {}", variant.class(), size_class),
    }
}

/// Styled `<button>`. `variant` may be reactive (e.g. a toggle that
/// changes look once pressed).
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    /// Renders `type="submit"` so the button submits its form.
    #[prop(optional)]
    submit: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || button_class(variant.get().unwrap_or_default(), size);
    let button_type = if submit { "submit" } else { "button" };

    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default()),
            "button button--primary"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Small),
            "button button--ghost button--small"
        );
    }
}
