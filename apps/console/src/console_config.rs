use std::env;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ekklesia_core::AppError;
use ekklesia_domain::ASSIGNMENT_DATE_FORMAT;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub users_file: Option<PathBuf>,
    pub today_override: Option<NaiveDate>,
    pub pretty: bool,
}

impl ConsoleConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let users_file = lookup("EKKLESIA_USERS_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let today_override = lookup("EKKLESIA_TODAY")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                NaiveDate::parse_from_str(value.trim(), ASSIGNMENT_DATE_FORMAT).map_err(|error| {
                    AppError::Validation(format!("invalid EKKLESIA_TODAY '{value}': {error}"))
                })
            })
            .transpose()?;

        let pretty = match lookup("EKKLESIA_REPORT_PRETTY")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "true".to_owned())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "true" => true,
            "false" => false,
            other => {
                return Err(AppError::Validation(format!(
                    "EKKLESIA_REPORT_PRETTY must be either 'true' or 'false', got '{other}'"
                )));
            }
        };

        Ok(Self {
            users_file,
            today_override,
            pretty,
        })
    }

    pub fn required_users_file(&self) -> Result<&Path, AppError> {
        self.users_file
            .as_deref()
            .ok_or_else(|| AppError::Validation("EKKLESIA_USERS_FILE is required".to_owned()))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use super::ConsoleConfig;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ConsoleConfig, ekklesia_core::AppError> {
        let values = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect::<HashMap<_, _>>();
        ConsoleConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]).unwrap_or_else(|_| panic!("test"));
        assert_eq!(config.users_file, None);
        assert_eq!(config.today_override, None);
        assert!(config.pretty);
        assert!(config.required_users_file().is_err());
    }

    #[test]
    fn today_override_is_parsed_as_calendar_date() {
        let config = config_from(&[
            ("EKKLESIA_USERS_FILE", "data/users.json"),
            ("EKKLESIA_TODAY", "2026-10-17"),
            ("EKKLESIA_REPORT_PRETTY", "FALSE"),
        ])
        .unwrap_or_else(|_| panic!("test"));

        assert_eq!(config.today_override, NaiveDate::from_ymd_opt(2026, 10, 17));
        assert!(!config.pretty);
        assert!(config.required_users_file().is_ok());
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = config_from(&[
            ("EKKLESIA_USERS_FILE", " "),
            ("EKKLESIA_TODAY", ""),
            ("EKKLESIA_REPORT_PRETTY", ""),
        ])
        .unwrap_or_else(|_| panic!("test"));

        assert_eq!(config.users_file, None);
        assert_eq!(config.today_override, None);
        assert!(config.pretty);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(config_from(&[("EKKLESIA_TODAY", "17/10/2026")]).is_err());
        assert!(config_from(&[("EKKLESIA_REPORT_PRETTY", "yes")]).is_err());
    }
}
