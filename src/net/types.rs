//! Wire DTOs for the platform's REST API.
//!
//! These mirror the backend's JSON shapes exactly so serde round-trips stay
//! lossless. Timestamps arrive as RFC 3339 strings and are kept as strings;
//! the client never does date arithmetic on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A course as served by `/api/courses/`. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    /// May be omitted by the server for courses without one.
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    /// Owning teacher's user id.
    pub teacher_id: i64,
    pub status: CourseStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Publication state of a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
    Inactive,
}

/// A lesson within a course, visible to enrolled students.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
    /// Omitted for lessons without a recording.
    #[serde(default)]
    pub video_url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A user record as served by the users endpoints. The registration-only
/// fields (name, surname, password) are never echoed back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub xp: i64,
    pub created_at: Option<String>,
}

/// Account role, discriminating what the backend lets a user do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Wire form used in request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }
}

/// Success body of `POST /api/auth/login`. The caller persists the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Success body of `POST /api/courses/{id}/enroll/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    pub message: String,
}
