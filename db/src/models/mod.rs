pub mod attendance_record;
pub mod patient;
pub mod session;
pub mod therapist;

pub use attendance_record::AttendanceRecord;
pub use patient::Patient;
pub use session::{Session, SessionStatus};
pub use therapist::Therapist;
