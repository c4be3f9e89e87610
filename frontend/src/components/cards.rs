use leptos::*;

/// Bordered dashboard section. `class` names the panel for styling hooks.
#[component]
pub fn Card(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <section class=format!("card {}", class)>
            {children()}
        </section>
    }
}
