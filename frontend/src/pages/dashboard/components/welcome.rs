use crate::{
    api::WelcomeContent,
    components::{cards::Card, layout::LoadingPlaceholder},
    pages::dashboard::view_model::use_welcome_state,
    state::load_state::LoadState,
};
use leptos::*;

pub const FALLBACK_GREETING: &str = "Welcome back!";
const MESSAGE_GLYPH: &str = "\u{2728}";

#[component]
pub fn WelcomePanel() -> impl IntoView {
    let state = use_welcome_state();
    view! { <WelcomeCard state=state /> }
}

#[component]
pub fn WelcomeCard(#[prop(into)] state: Signal<LoadState<WelcomeContent>>) -> impl IntoView {
    view! {
        <Card class="welcome">
            {move || match state.get() {
                LoadState::Loading => view! {
                    <LoadingPlaceholder message="Loading welcome..." />
                }.into_view(),
                LoadState::Fallback => view! { <p>{FALLBACK_GREETING}</p> }.into_view(),
                LoadState::Ready(content) => view! {
                    <h2>{content.title}</h2>
                    <p class="welcome-subtitle">{content.subtitle}</p>
                    <div class="messages">
                        {content
                            .messages
                            .into_iter()
                            .map(|message| view! {
                                <div class="message">{format!("{} {}", MESSAGE_GLYPH, message)}</div>
                            })
                            .collect_view()}
                    </div>
                }.into_view(),
            }}
        </Card>
    }
}
