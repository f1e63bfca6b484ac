//! Course list page — the landing view after login.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::nav_bar::NavBar;
use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::Course;

/// Guarded course list. Loads all courses on mount; enroll and details
/// actions live on the individual cards.
#[component]
pub fn CourseListPage() -> impl IntoView {
    let api = expect_context::<Api>();

    let courses = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.courses().await }
        }
    });

    view! {
        <div class="course-list-page">
            <NavBar/>
            <header class="course-list-page__header">
                <h1>"Courses"</h1>
            </header>
            <Suspense fallback=move || {
                view! { <p class="course-list-page__loading">"Loading courses..."</p> }
            }>{move || courses.get().map(render_courses)}</Suspense>
        </div>
    }
}

fn render_courses(result: Result<Vec<Course>, ApiError>) -> AnyView {
    match result {
        Ok(courses) if courses.is_empty() => {
            view! { <p class="course-list-page__empty">"No courses available yet."</p> }.into_any()
        }
        Ok(courses) => view! {
            <div class="course-list-page__grid">
                {courses
                    .into_iter()
                    .map(|course| view! { <CourseCard course=course/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(err) => {
            leptos::logging::warn!("course list load failed: {err}");
            view! { <p class="course-list-page__error">"Could not load courses."</p> }.into_any()
        }
    }
}
