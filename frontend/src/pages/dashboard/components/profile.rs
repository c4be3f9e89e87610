use crate::components::{cards::Card, common::Button};
use leptos::*;

#[component]
pub fn ProfilePanel(#[prop(into)] display_name: String) -> impl IntoView {
    view! {
        <Card class="profile">
            <h3>"\u{1F464} Profile"</h3>
            <div class="profile-info">
                <p><strong>"Student:"</strong>" "{display_name}</p>
                <p><strong>"Status:"</strong>" Active Learner"</p>
                <p><strong>"Joined:"</strong>" Jan 2026"</p>
            </div>
            <Button>"Edit Profile"</Button>
        </Card>
    }
}
