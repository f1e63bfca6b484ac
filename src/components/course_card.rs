//! Card component for course list entries, plus the shared enroll action.

#[cfg(test)]
#[path = "course_card_test.rs"]
mod course_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::Api;
use crate::net::types::{Course, CourseStatus};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::{error::ApiError, types::EnrollmentResponse};

fn detail_href(course_id: i64) -> String {
    format!("/courses/{course_id}")
}

pub(crate) fn status_label(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Active => "active",
        CourseStatus::Inactive => "inactive",
    }
}

/// What the blocking alert shows after an enrollment attempt: the server's
/// message on success, a static fallback on any failure.
#[cfg(any(test, feature = "hydrate"))]
fn enrollment_alert_message(result: &Result<EnrollmentResponse, ApiError>) -> String {
    match result {
        Ok(response) => response.message.clone(),
        Err(_) => "Could not enroll in the course.".to_owned(),
    }
}

/// Fire an enrollment request for `course_id` and alert the outcome.
///
/// The outcome is always delivered; nothing cancels an in-flight request.
pub(crate) fn spawn_enroll(api: Api, course_id: i64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.enroll(course_id).await;
        if let Err(err) = &result {
            leptos::logging::warn!("enrollment failed for course {course_id}: {err}");
        }
        alert(&enrollment_alert_message(&result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, course_id);
    }
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// A course in the list view, with enroll and view-details actions.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let course_id = course.id;
    let on_enroll = move |_| spawn_enroll(api.clone(), course_id);
    let on_details = move |_| navigate(&detail_href(course_id), NavigateOptions::default());

    let status = status_label(course.status);
    let status_class = format!("course-card__status course-card__status--{status}");

    view! {
        <div class="course-card">
            <img class="course-card__image" src=course.image_url.clone() alt=course.name.clone()/>
            <div class="course-card__body">
                <h2 class="course-card__name">{course.name.clone()}</h2>
                <span class=status_class>{status}</span>
                <p class="course-card__description">{course.description.clone()}</p>
            </div>
            <div class="course-card__actions">
                <button class="btn btn--primary" on:click=on_enroll>
                    "Enroll"
                </button>
                <button class="btn" on:click=on_details>
                    "View details"
                </button>
            </div>
        </div>
    }
}
