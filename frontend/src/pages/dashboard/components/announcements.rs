use crate::{
    components::cards::Card,
    pages::dashboard::repository::{AnnouncementRecord, ANNOUNCEMENTS},
};
use leptos::*;

#[component]
pub fn AnnouncementsPanel() -> impl IntoView {
    view! {
        <Card class="announcements">
            <h3>"\u{1F4E2} Announcements"</h3>
            <ul class="announcement-list">
                <For
                    each=|| ANNOUNCEMENTS
                    key=|announcement| announcement.id
                    children=|announcement: AnnouncementRecord| view! {
                        <li class="announcement-item">
                            <p>{announcement.text}</p>
                            <small>{announcement.date}</small>
                        </li>
                    }
                />
            </ul>
        </Card>
    }
}
