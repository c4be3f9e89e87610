use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
        }
    }
}

#[component]
pub fn Button(#[prop(optional)] variant: ButtonVariant, children: Children) -> impl IntoView {
    view! {
        <button type="button" class=variant.classes()>
            {children()}
        </button>
    }
}
