use leptos::*;

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{title}</p>
        </div>
    }
}
