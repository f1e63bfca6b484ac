//! Page modules for route-level screens.
//!
//! Each page owns route-scoped orchestration (form state, data loading)
//! and delegates shared rendering details to `components`.

pub mod course_detail;
pub mod course_list;
pub mod login;
pub mod register;
