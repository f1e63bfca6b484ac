use super::*;

#[test]
fn detail_href_targets_the_course_route() {
    assert_eq!(detail_href(5), "/courses/5");
}

#[test]
fn status_labels_match_the_wire_forms() {
    assert_eq!(status_label(CourseStatus::Active), "active");
    assert_eq!(status_label(CourseStatus::Inactive), "inactive");
}

#[test]
fn enrollment_alert_shows_the_server_message_on_success() {
    let result = Ok(EnrollmentResponse {
        message: "Enrollment created successfully".to_owned(),
    });
    assert_eq!(enrollment_alert_message(&result), "Enrollment created successfully");
}

#[test]
fn enrollment_alert_falls_back_on_any_failure() {
    for err in [
        ApiError::Unauthorized,
        ApiError::Status(500),
        ApiError::Network("offline".to_owned()),
    ] {
        assert_eq!(
            enrollment_alert_message(&Err(err)),
            "Could not enroll in the course."
        );
    }
}
