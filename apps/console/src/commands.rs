use std::process::ExitCode;

use ekklesia_application::AccessControlService;
use ekklesia_core::{AppError, AppResult};
use ekklesia_domain::{PageId, User, UserId};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::dto::{AccessReportResponse, UserAccessResponse, role_catalog_response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Report,
    Check { user_id: UserId, page: PageId },
    Catalog,
}

impl ConsoleCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> AppResult<Self> {
        let command = match args.next().as_deref() {
            None | Some("report") => Self::Report,
            Some("catalog") => Self::Catalog,
            Some("check") => {
                let user_id = args
                    .next()
                    .ok_or_else(|| AppError::Validation("check requires a user id".to_owned()))?;
                let page = args
                    .next()
                    .ok_or_else(|| AppError::Validation("check requires a page id".to_owned()))?;

                let user_id = Uuid::parse_str(user_id.trim())
                    .map(UserId::from_uuid)
                    .map_err(|error| {
                        AppError::Validation(format!("invalid user id '{user_id}': {error}"))
                    })?;

                Self::Check {
                    user_id,
                    page: PageId::from_transport(page.as_str())?,
                }
            }
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "unknown command '{other}', expected 'report', 'check' or 'catalog'"
                )));
            }
        };

        if let Some(extra) = args.next() {
            return Err(AppError::Validation(format!(
                "unexpected argument '{extra}'"
            )));
        }

        Ok(command)
    }
}

/// Result of a single page access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Granted,
    Denied(String),
}

impl CheckOutcome {
    fn from_access(result: AppResult<()>) -> AppResult<Self> {
        match result {
            Ok(()) => Ok(Self::Granted),
            Err(error @ (AppError::Forbidden(_) | AppError::Unauthorized(_))) => {
                Ok(Self::Denied(error.to_string()))
            }
            Err(error) => Err(error),
        }
    }

    /// Process exit status: `0` when granted, `2` when denied.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Granted => 0,
            Self::Denied(_) => 2,
        }
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Granted => formatter.write_str("granted"),
            Self::Denied(reason) => write!(formatter, "denied: {reason}"),
        }
    }
}

pub fn build_report(
    service: &AccessControlService,
    users: &[User],
    today: chrono::NaiveDate,
) -> AccessReportResponse {
    AccessReportResponse::new(
        today,
        users
            .iter()
            .map(|user| UserAccessResponse::from_summary(user, service.session_summary(Some(user))))
            .collect(),
    )
}

pub fn run_report(
    service: &AccessControlService,
    users: &[User],
    today: chrono::NaiveDate,
    pretty: bool,
) -> AppResult<ExitCode> {
    let report = build_report(service, users, today);

    info!(user_count = users.len(), "access report generated");
    print_json(&report, pretty)?;
    Ok(ExitCode::SUCCESS)
}

pub fn check_access(
    service: &AccessControlService,
    users: &[User],
    user_id: UserId,
    page: PageId,
) -> AppResult<CheckOutcome> {
    let user = users
        .iter()
        .find(|user| user.id() == user_id)
        .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))?;

    CheckOutcome::from_access(service.require_page_access(Some(user), page))
}

pub fn run_check(
    service: &AccessControlService,
    users: &[User],
    user_id: UserId,
    page: PageId,
) -> AppResult<ExitCode> {
    let outcome = check_access(service, users, user_id, page)?;

    println!("{outcome}");
    Ok(ExitCode::from(outcome.exit_status()))
}

pub fn run_catalog(service: &AccessControlService, pretty: bool) -> AppResult<ExitCode> {
    print_json(&role_catalog_response(service.policy()), pretty)?;
    Ok(ExitCode::SUCCESS)
}

fn print_json(value: &impl Serialize, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|error| AppError::Internal(format!("failed to render JSON output: {error}")))?;

    println!("{rendered}");
    Ok(())
}
