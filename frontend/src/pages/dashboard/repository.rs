use crate::api::{ApiClient, CourseRecord, ResourceLoadFailure, WelcomeContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncementRecord {
    pub id: u32,
    pub text: &'static str,
    pub date: &'static str,
}

pub const ANNOUNCEMENTS: [AnnouncementRecord; 3] = [
    AnnouncementRecord {
        id: 1,
        text: "New React course live!",
        date: "Jan 28",
    },
    AnnouncementRecord {
        id: 2,
        text: "Maintenance scheduled for Sunday",
        date: "Jan 27",
    },
    AnnouncementRecord {
        id: 3,
        text: "Certificate programs available now",
        date: "Jan 26",
    },
];

pub async fn fetch_welcome(api: &ApiClient) -> Result<WelcomeContent, ResourceLoadFailure> {
    api.get_welcome().await
}

pub async fn fetch_courses(api: &ApiClient) -> Result<Vec<CourseRecord>, ResourceLoadFailure> {
    api.list_courses().await
}
