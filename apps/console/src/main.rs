//! Ekklesia console access tooling.

#![forbid(unsafe_code)]

mod commands;
mod console_config;
mod dto;
mod users_file;

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use ekklesia_application::{AccessControlService, Clock, FixedClock, SystemClock};
use ekklesia_core::AppError;
use ekklesia_domain::{NavigationTree, PermissionPolicy};
use tracing::info;

use crate::commands::{ConsoleCommand, run_catalog, run_check, run_report};
use crate::console_config::{ConsoleConfig, init_tracing};
use crate::users_file::load_users;

fn main() -> Result<ExitCode, AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ConsoleConfig::load()?;
    let command = ConsoleCommand::parse(env::args().skip(1))?;

    let clock: Arc<dyn Clock> = match config.today_override {
        Some(today) => Arc::new(FixedClock::new(today)),
        None => Arc::new(SystemClock),
    };
    let today = clock.today();
    let service = AccessControlService::new(
        Arc::new(PermissionPolicy::standard()),
        Arc::new(NavigationTree::standard()),
        clock,
    )?;

    info!(%today, command = ?command, "ekklesia-console started");

    match command {
        ConsoleCommand::Catalog => run_catalog(&service, config.pretty),
        ConsoleCommand::Report => {
            let users = load_users(config.required_users_file()?)?;
            run_report(&service, &users, today, config.pretty)
        }
        ConsoleCommand::Check { user_id, page } => {
            let users = load_users(config.required_users_file()?)?;
            run_check(&service, &users, user_id, page)
        }
    }
}
