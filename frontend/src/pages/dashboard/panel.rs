use crate::pages::dashboard::{
    components::{AnnouncementsPanel, CoursePanel, ProfilePanel, WelcomePanel},
    layout::{DashboardFrame, MainContent, Sidebar},
    view_model::use_api_client,
};
use crate::state::diagnostics::use_diagnostics;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};

pub const STUDENT_DISPLAY_NAME: &str = "Alice Johnson";

#[component]
pub fn DashboardPage() -> impl IntoView {
    provide_meta_context();
    // Shared by both fetching panels unless the caller already provided them.
    use_api_client();
    use_diagnostics();

    view! {
        <Title text="Acme Learning Dashboard"/>
        <DashboardFrame>
            <Sidebar>
                <ProfilePanel display_name=STUDENT_DISPLAY_NAME />
                <AnnouncementsPanel />
            </Sidebar>
            <MainContent>
                <WelcomePanel />
                <CoursePanel />
            </MainContent>
        </DashboardFrame>
    }
}
