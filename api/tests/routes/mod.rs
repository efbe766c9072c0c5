mod attendance_test;
mod fallback_test;
mod health_test;
mod patients_test;
mod sessions_test;
mod therapists_test;
