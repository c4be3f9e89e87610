use crate::{
    api::CourseRecord,
    components::{cards::Card, empty_state::EmptyState, layout::LoadingPlaceholder},
    pages::dashboard::view_model::use_courses_state,
    state::load_state::LoadState,
};
use leptos::*;

pub const NO_COURSES: &str = "No courses available.";
const INSTRUCTOR_GLYPH: &str = "\u{1F468}\u{200D}\u{1F3EB}";
const DURATION_GLYPH: &str = "\u{23F1}\u{FE0F}";

#[component]
pub fn CoursePanel() -> impl IntoView {
    let state = use_courses_state();
    view! { <CourseList state=state /> }
}

#[component]
pub fn CourseList(#[prop(into)] state: Signal<LoadState<Vec<CourseRecord>>>) -> impl IntoView {
    view! {
        <Card class="courses">
            {move || match state.get() {
                LoadState::Loading => view! {
                    <LoadingPlaceholder message="Loading courses..." />
                }.into_view(),
                LoadState::Ready(courses) if !courses.is_empty() => view! {
                    <h2>"\u{1F4D6} Available Courses"</h2>
                    <ul class="course-list">
                        <For
                            each=move || courses.clone()
                            key=|course| course.id
                            children=move |course: CourseRecord| view! { <CourseItem course=course /> }
                        />
                    </ul>
                }.into_view(),
                // An empty list and a failed load read the same to the learner.
                LoadState::Ready(_) | LoadState::Fallback => view! {
                    <h2>"\u{1F4D6} Available Courses"</h2>
                    <EmptyState title=NO_COURSES />
                }.into_view(),
            }}
        </Card>
    }
}

#[component]
fn CourseItem(course: CourseRecord) -> impl IntoView {
    view! {
        <li class="course-item" data-course-id=course.id.to_string()>
            <div class="course-header">
                <h3>{course.title}</h3>
                <span class="badge">{course.level}</span>
            </div>
            <p class="description">{course.description}</p>
            <div class="course-meta">
                <span class="instructor">{format!("{} {}", INSTRUCTOR_GLYPH, course.instructor)}</span>
                <span class="duration">{format!("{} {}", DURATION_GLYPH, course.duration)}</span>
            </div>
        </li>
    }
}
