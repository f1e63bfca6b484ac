//! Course detail page: full description, lessons, and an enroll action.

#[cfg(test)]
#[path = "course_detail_test.rs"]
mod course_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::course_card::{spawn_enroll, status_label};
use crate::components::nav_bar::NavBar;
use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::Lesson;

fn parse_course_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}

/// Lessons are served only to enrolled students; a 403 is an expected
/// state here, not a failure.
fn lessons_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Forbidden => "Enroll in this course to view its lessons.",
        _ => "Could not load lessons.",
    }
}

/// Guarded course detail view. Reads the course id from the route, loads
/// the course and its lessons, and offers the same enroll action as the
/// list view.
#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();

    let course = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = parse_course_id(params.read().get("id"));
            async move {
                match id {
                    Some(id) => api.course(id).await,
                    None => Err(ApiError::Validation),
                }
            }
        }
    });

    let lessons = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = parse_course_id(params.read().get("id"));
            async move {
                match id {
                    Some(id) => api.course_lessons(id).await,
                    None => Err(ApiError::Validation),
                }
            }
        }
    });

    let enroll_api = api.clone();

    view! {
        <div class="course-detail-page">
            <NavBar/>
            <Suspense fallback=move || {
                view! { <p class="course-detail-page__loading">"Loading course..."</p> }
            }>
                {move || {
                    course
                        .get()
                        .map(|result| match result {
                            Ok(course) => {
                                let course_id = course.id;
                                let api = enroll_api.clone();
                                let status = status_label(course.status);
                                let status_class = format!(
                                    "course-detail__status course-detail__status--{status}"
                                );
                                view! {
                                    <article class="course-detail">
                                        <img
                                            class="course-detail__image"
                                            src=course.image_url.clone()
                                            alt=course.name.clone()
                                        />
                                        <h1>{course.name.clone()}</h1>
                                        <span class=status_class>{status}</span>
                                        <p class="course-detail__description">
                                            {course.description.clone()}
                                        </p>
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| spawn_enroll(api.clone(), course_id)
                                        >
                                            "Enroll"
                                        </button>
                                    </article>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                leptos::logging::warn!("course load failed: {err}");
                                view! {
                                    <p class="course-detail-page__error">
                                        "Could not load the course."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <section class="course-detail__lessons">
                <h2>"Lessons"</h2>
                <Suspense fallback=move || {
                    view! { <p class="course-detail__lessons-loading">"Loading lessons..."</p> }
                }>{move || lessons.get().map(render_lessons)}</Suspense>
            </section>
        </div>
    }
}

fn render_lessons(result: Result<Vec<Lesson>, ApiError>) -> AnyView {
    match result {
        Ok(lessons) if lessons.is_empty() => {
            view! { <p class="course-detail__lessons-empty">"No lessons yet."</p> }.into_any()
        }
        Ok(lessons) => view! {
            <ul class="lesson-list">
                {lessons
                    .into_iter()
                    .map(|lesson| {
                        view! {
                            <li class="lesson-list__item">
                                <span class="lesson-list__title">{lesson.title}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        Err(err) => {
            if err != ApiError::Forbidden {
                leptos::logging::warn!("lesson list load failed: {err}");
            }
            view! { <p class="course-detail__lessons-hint">{lessons_error_message(&err)}</p> }
                .into_any()
        }
    }
}
