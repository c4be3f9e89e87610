use leptos::*;

#[component]
pub fn LoadingPlaceholder(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="loading" role="status" aria-live="polite">{message}</p>
    }
}
