//! Request DTOs for API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use classroll_core::AttendanceMark;

use crate::error::ApiError;

/// Date format accepted by the attendance endpoints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Login request body.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "rivera@school.test")]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

/// Query parameters for the class roster.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RosterQuery {
    /// Schedule whose batch is listed
    #[param(value_type = Option<i32>, example = 12)]
    pub schedule_id: Option<String>,
}

/// Query parameters for the attendance view.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AttendanceQuery {
    #[param(value_type = Option<i32>, example = 12)]
    pub schedule_id: Option<String>,

    /// Date in `YYYY-MM-DD` form
    #[param(example = "2024-05-06")]
    pub date: Option<String>,
}

/// Identifier sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(i64),
    Text(String),
}

impl FlexibleId {
    pub fn to_i32(&self) -> Option<i32> {
        match self {
            FlexibleId::Number(n) => i32::try_from(*n).ok(),
            FlexibleId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One `{student_id, status}` entry of a mark-attendance request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttendanceEntry {
    #[schema(value_type = i32, example = 1)]
    pub student_id: FlexibleId,

    #[serde(default)]
    #[schema(example = "present")]
    pub status: String,
}

/// Request body for saving attendance.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendanceRequest {
    #[schema(value_type = Option<i32>, example = 12)]
    pub schedule_id: Option<FlexibleId>,

    #[schema(example = "2024-05-06")]
    pub date: Option<String>,

    #[serde(default)]
    pub attendance_data: Vec<AttendanceEntry>,
}

/// Validated mark-attendance request.
#[derive(Debug)]
pub struct ValidatedMarks {
    pub schedule_id: i32,
    pub date: NaiveDate,
    pub marks: Vec<AttendanceMark>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a schedule id query parameter.
pub fn parse_schedule_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid schedule ID.".to_string()))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        ApiError::BadRequest("Invalid date format. Expected YYYY-MM-DD.".to_string())
    })
}

impl RosterQuery {
    pub fn schedule_id(&self) -> Result<i32, ApiError> {
        let raw = present(self.schedule_id.as_deref())
            .ok_or_else(|| ApiError::BadRequest("Schedule ID is required.".to_string()))?;
        parse_schedule_id(raw)
    }
}

impl AttendanceQuery {
    pub fn validate(&self) -> Result<(i32, NaiveDate), ApiError> {
        let (Some(schedule_id), Some(date)) = (
            present(self.schedule_id.as_deref()),
            present(self.date.as_deref()),
        ) else {
            return Err(ApiError::BadRequest(
                "Schedule ID and date are required.".to_string(),
            ));
        };
        Ok((parse_schedule_id(schedule_id)?, parse_date(date)?))
    }
}

impl MarkAttendanceRequest {
    /// Checks presence and format of every field. Blank statuses are left
    /// for the attendance service to reject.
    pub fn validate(self) -> Result<ValidatedMarks, ApiError> {
        let missing = || ApiError::BadRequest("Missing required data.".to_string());

        let schedule_id = self.schedule_id.ok_or_else(missing)?;
        let date = present(self.date.as_deref()).ok_or_else(missing)?;
        if self.attendance_data.is_empty() {
            return Err(missing());
        }

        let schedule_id = schedule_id
            .to_i32()
            .ok_or_else(|| ApiError::BadRequest("Invalid schedule ID.".to_string()))?;
        let date = parse_date(date)?;

        let marks = self
            .attendance_data
            .into_iter()
            .map(|entry| {
                entry
                    .student_id
                    .to_i32()
                    .map(|id| AttendanceMark::new(id, entry.status))
                    .ok_or_else(|| ApiError::BadRequest("Invalid student ID.".to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedMarks {
            schedule_id,
            date,
            marks,
        })
    }
}
