pub mod announcements;
pub mod courses;
pub mod profile;
pub mod welcome;

pub use announcements::AnnouncementsPanel;
pub use courses::{CourseList, CoursePanel};
pub use profile::ProfilePanel;
pub use welcome::{WelcomeCard, WelcomePanel};
