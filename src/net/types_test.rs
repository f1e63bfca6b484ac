use super::*;

#[test]
fn course_deserializes_the_backend_shape() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": 5,
        "name": "Rust for Beginners",
        "description": "Ownership without tears.",
        "image_url": "https://cdn.example.com/rust.png",
        "teacher_id": 2,
        "status": "active",
        "created_at": "2025-01-02T10:00:00Z",
        "updated_at": "2025-01-03T11:30:00Z"
    }))
    .unwrap();

    assert_eq!(course.id, 5);
    assert_eq!(course.status, CourseStatus::Active);
    assert_eq!(course.teacher_id, 2);
}

#[test]
fn course_description_may_be_omitted() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Untitled",
        "image_url": "",
        "teacher_id": 1,
        "status": "inactive",
        "created_at": "2025-01-02T10:00:00Z",
        "updated_at": "2025-01-02T10:00:00Z"
    }))
    .unwrap();

    assert_eq!(course.description, "");
    assert_eq!(course.status, CourseStatus::Inactive);
}

#[test]
fn course_status_uses_lowercase_wire_form() {
    assert_eq!(
        serde_json::to_value(CourseStatus::Active).unwrap(),
        serde_json::json!("active")
    );
    assert!(serde_json::from_value::<CourseStatus>(serde_json::json!("Archived")).is_err());
}

#[test]
fn lesson_video_url_defaults_when_omitted() {
    let lesson: Lesson = serde_json::from_value(serde_json::json!({
        "id": 7,
        "course_id": 5,
        "title": "Borrowing",
        "content": "References and lifetimes.",
        "created_at": "2025-02-01T09:00:00Z",
        "updated_at": "2025-02-01T09:00:00Z"
    }))
    .unwrap();

    assert_eq!(lesson.video_url, "");
    assert_eq!(lesson.course_id, 5);
}

#[test]
fn user_deserializes_the_users_endpoint_shape() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 3,
        "username": "ayan",
        "email": "ayan@example.com",
        "role": "student",
        "level": 1,
        "xp": 250,
        "created_at": "2025-01-10T08:00:00Z"
    }))
    .unwrap();

    assert_eq!(user.role, Role::Student);
    assert_eq!(user.xp, 250);
}

#[test]
fn role_wire_forms_are_lowercase() {
    assert_eq!(Role::Student.as_str(), "student");
    assert_eq!(Role::Teacher.as_str(), "teacher");
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(
        serde_json::from_value::<Role>(serde_json::json!("admin")).unwrap(),
        Role::Admin
    );
}

#[test]
fn login_response_carries_the_token() {
    let response: LoginResponse =
        serde_json::from_value(serde_json::json!({ "token": "abc123" })).unwrap();
    assert_eq!(response.token, "abc123");
}

#[test]
fn enrollment_response_carries_the_server_message() {
    let response: EnrollmentResponse =
        serde_json::from_value(serde_json::json!({ "message": "Enrollment created successfully" }))
            .unwrap();
    assert_eq!(response.message, "Enrollment created successfully");
}
