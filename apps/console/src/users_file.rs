use std::collections::HashSet;
use std::fs;
use std::path::Path;

use ekklesia_core::{AppError, AppResult};
use ekklesia_domain::User;
use serde_json::Value;

pub fn load_users(path: &Path) -> AppResult<Vec<User>> {
    let contents = fs::read_to_string(path).map_err(|error| {
        AppError::Internal(format!(
            "failed to read users file '{}': {error}",
            path.display()
        ))
    })?;

    parse_users(contents.as_str())
}

pub fn parse_users(contents: &str) -> AppResult<Vec<User>> {
    let records: Vec<Value> = serde_json::from_str(contents)
        .map_err(|error| AppError::Validation(format!("invalid users file: {error}")))?;

    let users = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| parse_user(index, record))
        .collect::<AppResult<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for user in &users {
        if !seen.insert(user.id()) {
            return Err(AppError::Conflict(format!(
                "user '{}' appears more than once in users file",
                user.id()
            )));
        }
    }

    Ok(users)
}

fn parse_user(index: usize, record: Value) -> AppResult<User> {
    let label = match record.get("id").and_then(Value::as_str) {
        Some(id) => format!("user '{id}'"),
        None => format!("user #{}", index + 1),
    };

    serde_json::from_value(record).map_err(|error| {
        AppError::Validation(format!("invalid users file: {label}: {error}"))
    })
}

#[cfg(test)]
mod tests {
    use super::parse_users;

    #[test]
    fn users_with_role_history_are_parsed() {
        let users = parse_users(
            r#"[
                {
                    "id": "0b6c9a8e-2f4d-4c1b-9e7a-5d3f2a1b0c9d",
                    "displayName": "Ruth A.",
                    "roles": [
                        {"role": "Trésorier", "startDate": "2024-01-01"},
                        {"role": "Secrétaire", "startDate": "2019-01-01", "endDate": "2023-12-31"}
                    ]
                }
            ]"#,
        );

        assert!(users.is_ok());
        let users = users.unwrap_or_default();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role_assignments().len(), 2);
    }

    #[test]
    fn duplicate_user_ids_are_rejected() {
        let users = parse_users(
            r#"[
                {"id": "0b6c9a8e-2f4d-4c1b-9e7a-5d3f2a1b0c9d", "displayName": "Ruth A."},
                {"id": "0b6c9a8e-2f4d-4c1b-9e7a-5d3f2a1b0c9d", "displayName": "Ruth B."}
            ]"#,
        );
        assert!(matches!(users, Err(ekklesia_core::AppError::Conflict(_))));
    }

    #[test]
    fn malformed_assignment_dates_are_rejected() {
        let users = parse_users(
            r#"[
                {
                    "id": "0b6c9a8e-2f4d-4c1b-9e7a-5d3f2a1b0c9d",
                    "displayName": "Ruth A.",
                    "roles": [{"role": "Trésorier", "startDate": "2024-02-30"}]
                }
            ]"#,
        );
        assert!(matches!(users, Err(ekklesia_core::AppError::Validation(_))));
    }

    #[test]
    fn assignment_errors_name_the_user_and_date_field() {
        let users = parse_users(
            r#"[
                {"id": "c3d4e5f6-a7b8-4c9d-8e0f-1a2b3c4d5e6f", "displayName": "Samuel T."},
                {
                    "id": "0b6c9a8e-2f4d-4c1b-9e7a-5d3f2a1b0c9d",
                    "displayName": "Ruth A.",
                    "roles": [{"role": "Trésorier", "startDate": "2024-02-30"}]
                }
            ]"#,
        );

        let message = users.err().map(|error| error.to_string()).unwrap_or_default();
        assert!(message.contains("user '0b6c9a8e-2f4d-4c1b-9e7a-5d3f2a1b0c9d'"));
        assert!(message.contains("startDate '2024-02-30'"));
    }

    #[test]
    fn records_without_an_id_are_named_by_position() {
        let users = parse_users(r#"[{"displayName": "Ruth A."}]"#);

        let message = users.err().map(|error| error.to_string()).unwrap_or_default();
        assert!(message.contains("user #1"));
    }
}
