//! Time-bounded role tenures.
//!
//! Assignments are validated when they are created or deserialized, so the
//! read-side resolvers only ever see well-formed date ranges.

use chrono::NaiveDate;
use ekklesia_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::RoleName;

/// Calendar format accepted for transport dates.
pub const ASSIGNMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle position of an assignment relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Starts after the given day.
    Scheduled,
    /// Covers the given day.
    Active,
    /// Ended before the given day.
    Expired,
}

impl AssignmentStatus {
    /// Returns the stable label shown in role history listings.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }
}

/// One tenure of a user in a named role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoleAssignmentRecord", into = "RoleAssignmentRecord")]
pub struct RoleAssignment {
    role: RoleName,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl RoleAssignment {
    /// Creates a validated role assignment.
    ///
    /// The end date, when present, must not precede the start date.
    pub fn new(
        role: RoleName,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Self> {
        if let Some(end_date) = end_date
            && end_date < start_date
        {
            return Err(AppError::Validation(format!(
                "role '{role}' assignment ends on {end_date} before it starts on {start_date}"
            )));
        }

        Ok(Self {
            role,
            start_date,
            end_date,
        })
    }

    /// Parses transport values (`YYYY-MM-DD` dates) into a validated assignment.
    pub fn from_transport(role: &str, start_date: &str, end_date: Option<&str>) -> AppResult<Self> {
        let role = RoleName::from_transport(role)?;
        let start_date = parse_assignment_date("start_date", start_date)?;
        let end_date = end_date
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| parse_assignment_date("end_date", value))
            .transpose()?;

        Self::new(role, start_date, end_date)
    }

    /// Returns the assigned role.
    #[must_use]
    pub fn role(&self) -> RoleName {
        self.role
    }

    /// Returns the first day of the tenure.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the last day of the tenure, if bounded.
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns whether the tenure covers `today`. Both bounds are inclusive.
    #[must_use]
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.status_on(today) == AssignmentStatus::Active
    }

    /// Classifies the tenure relative to `today`.
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> AssignmentStatus {
        if self.start_date > today {
            return AssignmentStatus::Scheduled;
        }

        match self.end_date {
            Some(end_date) if end_date < today => AssignmentStatus::Expired,
            _ => AssignmentStatus::Active,
        }
    }
}

fn parse_assignment_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ASSIGNMENT_DATE_FORMAT).map_err(|error| {
        AppError::Validation(format!("invalid {field} '{value}': {error}"))
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleAssignmentRecord {
    role: RoleName,
    start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
}

impl TryFrom<RoleAssignmentRecord> for RoleAssignment {
    type Error = AppError;

    fn try_from(value: RoleAssignmentRecord) -> Result<Self, Self::Error> {
        let start_date = parse_assignment_date("startDate", value.start_date.as_str())
            .map_err(|error| assignment_error(value.role, error))?;
        let end_date = value
            .end_date
            .as_deref()
            .map(str::trim)
            .filter(|end_date| !end_date.is_empty())
            .map(|end_date| parse_assignment_date("endDate", end_date))
            .transpose()
            .map_err(|error| assignment_error(value.role, error))?;

        Self::new(value.role, start_date, end_date)
    }
}

impl From<RoleAssignment> for RoleAssignmentRecord {
    fn from(value: RoleAssignment) -> Self {
        Self {
            role: value.role,
            start_date: value.start_date.format(ASSIGNMENT_DATE_FORMAT).to_string(),
            end_date: value
                .end_date
                .map(|end_date| end_date.format(ASSIGNMENT_DATE_FORMAT).to_string()),
        }
    }
}

fn assignment_error(role: RoleName, error: AppError) -> AppError {
    match error {
        AppError::Validation(message) => {
            AppError::Validation(format!("role '{role}' assignment has {message}"))
        }
        other => other,
    }
}
