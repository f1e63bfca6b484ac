//! Endpoint surface of the platform API.
//!
//! ERROR HANDLING
//! ==============
//! Methods never panic and never fail synchronously; every failure arrives
//! as an `ApiError` through the async result. On the server (SSR) these
//! endpoints are meaningless, so each method degrades to a network error
//! there, mirroring the hydrate-only split of the request pipeline.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::types::{Course, EnrollmentResponse, Lesson, LoginResponse, User};
use crate::session::Session;

/// API client bound to a session at construction time.
///
/// Binding the session here is what composes the authorization stage into
/// the pipeline: every request issued through this client passes through
/// `http`'s bearer-header stage with this session's token.
#[derive(Clone)]
pub struct Api {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    session: Session,
}

#[cfg(any(test, feature = "hydrate"))]
const COURSES_ENDPOINT: &str = "/courses/";
#[cfg(any(test, feature = "hydrate"))]
const USERS_ENDPOINT: &str = "/users";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/auth/register";

#[cfg(any(test, feature = "hydrate"))]
fn course_endpoint(id: i64) -> String {
    format!("/courses/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn enroll_endpoint(id: i64) -> String {
    format!("/courses/{id}/enroll/")
}

#[cfg(any(test, feature = "hydrate"))]
fn lessons_endpoint(id: i64) -> String {
    format!("/courses/{id}/lessons")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(username: &str) -> String {
    format!("/users/{username}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(
    username: &str,
    name: &str,
    surname: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Value {
    serde_json::json!({
        "username": username,
        "name": name,
        "surname": surname,
        "email": email,
        "password": password,
        "role": role,
    })
}

/// `GET /courses/` wraps the list in an envelope; unwrapped here.
#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct CoursesEnvelope {
    courses: Vec<Course>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct LessonsEnvelope {
    lessons: Vec<Lesson>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

impl Api {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Authenticate with email and password. On success the server returns
    /// a fresh token; persisting it is the caller's responsibility.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::post_json(&self.session, LOGIN_ENDPOINT, &login_payload(email, password))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(server_side())
        }
    }

    /// Create an account. The ack body is server-defined, so it is returned
    /// schemaless rather than forced into a struct.
    pub async fn register(
        &self,
        username: &str,
        name: &str,
        surname: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = register_payload(username, name, surname, email, password, role);
            super::http::post_json(&self.session, REGISTER_ENDPOINT, &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, name, surname, email, password, role);
            Err(server_side())
        }
    }

    /// All courses, unwrapped from the `{courses}` envelope.
    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope: CoursesEnvelope =
                super::http::get_json(&self.session, COURSES_ENDPOINT).await?;
            Ok(envelope.courses)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    /// A single course by id.
    pub async fn course(&self, id: i64) -> Result<Course, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::get_json(&self.session, &course_endpoint(id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(server_side())
        }
    }

    /// Enroll the current user in course `id`.
    pub async fn enroll(&self, id: i64) -> Result<EnrollmentResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::post_json(&self.session, &enroll_endpoint(id), &serde_json::json!({}))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(server_side())
        }
    }

    /// Lessons of course `id`. The server answers 403 for students who are
    /// not enrolled; callers render that as a hint, not a failure.
    pub async fn course_lessons(&self, id: i64) -> Result<Vec<Lesson>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope: LessonsEnvelope =
                super::http::get_json(&self.session, &lessons_endpoint(id)).await?;
            Ok(envelope.lessons)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(server_side())
        }
    }

    /// All user records, unwrapped from the `{users}` envelope.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope: UsersEnvelope =
                super::http::get_json(&self.session, USERS_ENDPOINT).await?;
            Ok(envelope.users)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    /// A single user record by username.
    pub async fn user(&self, username: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::get_json(&self.session, &user_endpoint(username)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
            Err(server_side())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
