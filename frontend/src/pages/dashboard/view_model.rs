use crate::api::{ApiClient, CourseRecord, WelcomeContent};
use crate::pages::dashboard::repository;
use crate::state::load_state::{use_load_on_mount, LoadState};
use leptos::*;

pub fn use_api_client() -> ApiClient {
    match use_context::<ApiClient>() {
        Some(api) => api,
        None => {
            let api = ApiClient::new();
            provide_context(api.clone());
            api
        }
    }
}

pub fn use_welcome_state() -> RwSignal<LoadState<WelcomeContent>> {
    let api = use_api_client();
    use_load_on_mount(move || {
        let api = api.clone();
        async move { repository::fetch_welcome(&api).await }
    })
}

pub fn use_courses_state() -> RwSignal<LoadState<Vec<CourseRecord>>> {
    let api = use_api_client();
    use_load_on_mount(move || {
        let api = api.clone();
        async move { repository::fetch_courses(&api).await }
    })
}
