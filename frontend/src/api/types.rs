use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, alias = "fullName", alias = "name")]
    pub full_name: String,
    pub role: String,
}

/// Student reference carried by aggregated stats.
///
/// The stats endpoint returns either the bare student id or the populated
/// student document; both resolve to the same identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentRef {
    Id(String),
    Profile(StudentProfile),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
}

impl StudentRef {
    pub fn id(&self) -> &str {
        match self {
            StudentRef::Id(id) => id,
            StudentRef::Profile(profile) => &profile.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            StudentRef::Id(_) => None,
            StudentRef::Profile(profile) => profile.name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStat {
    pub student: StudentRef,
    #[serde(default)]
    pub student_name: Option<String>,
    pub present_percentage: f64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl AttendanceStat {
    pub fn display_name(&self) -> String {
        self.student_name
            .as_deref()
            .or_else(|| self.student.name())
            .unwrap_or_else(|| self.student.id())
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStudent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub registration_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    Face,
    Manual,
    #[serde(other)]
    Other,
}

impl VerificationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationMethod::Face => "Face",
            VerificationMethod::Manual => "Manual",
            VerificationMethod::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(other)]
    Other,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Other => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub student: RecordStudent,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    pub verification_method: VerificationMethod,
    pub status: AttendanceStatus,
}

/// A scheduling window such as `09:00-10:00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeSlotParseError {
    #[error("time slot `{0}` must contain exactly one '-'")]
    Separator(String),
    #[error("time slot `{0}` has an empty start or end")]
    EmptyBound(String),
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split('-');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeSlotParseError::Separator(raw.to_string()));
        };
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(TimeSlotParseError::EmptyBound(raw.to_string()));
        }
        Ok(Self::new(start, end))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    #[serde(alias = "message")]
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }
}
