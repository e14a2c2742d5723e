#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{
        AttendanceRecord, AttendanceStat, AttendanceStatus, RecordStudent, StudentRef,
        UserResponse, VerificationMethod,
    };
    use chrono::{TimeZone, Utc};

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            username: "admin".into(),
            full_name: "Priya Admin".into(),
            role: "admin".into(),
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-staff".into(),
            username: "staff".into(),
            full_name: "Sam Staff".into(),
            role: "staff".into(),
        }
    }

    pub fn stat(student: &str, percentage: f64) -> AttendanceStat {
        AttendanceStat {
            student: StudentRef::Id(student.into()),
            student_name: None,
            present_percentage: percentage,
            start_time: None,
            end_time: None,
        }
    }

    pub fn slot_stat(student: &str, percentage: f64, start: &str, end: &str) -> AttendanceStat {
        AttendanceStat {
            start_time: Some(start.into()),
            end_time: Some(end.into()),
            ..stat(student, percentage)
        }
    }

    pub fn record(id: &str, name: &str, method: VerificationMethod) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            student: RecordStudent {
                name: name.into(),
                registration_number: format!("REG-{}", id),
            },
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap(),
            start_time: Some("09:00".into()),
            end_time: Some("10:00".into()),
            verification_method: method,
            status: AttendanceStatus::Present,
        }
    }
}
