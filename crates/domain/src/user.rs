//! User domain types relevant to access control.

use ekklesia_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RoleAssignment;

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Console user with the history of role tenures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    display_name: NonEmptyString,
    #[serde(default)]
    roles: Vec<RoleAssignment>,
}

impl User {
    /// Creates a validated user.
    pub fn new(
        id: UserId,
        display_name: impl Into<String>,
        roles: Vec<RoleAssignment>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            display_name: NonEmptyString::new(display_name)?,
            roles,
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &NonEmptyString {
        &self.display_name
    }

    /// Returns role assignments in insertion order.
    #[must_use]
    pub fn role_assignments(&self) -> &[RoleAssignment] {
        self.roles.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::{User, UserId};

    #[test]
    fn blank_display_name_is_rejected() {
        assert!(User::new(UserId::new(), "  ", Vec::new()).is_err());
    }

    #[test]
    fn user_without_roles_field_deserializes_with_empty_history() {
        let user: Result<User, _> = serde_json::from_str(
            r#"{"id":"6f1c2a53-4b8e-4d52-9f0e-3c1a7b9d2e10","displayName":"Esther N."}"#,
        );
        assert!(user.is_ok());
        assert!(
            user.map(|user| user.role_assignments().is_empty())
                .unwrap_or(false)
        );
    }

    #[test]
    fn invalid_assignment_rejects_the_whole_user() {
        let user: Result<User, _> = serde_json::from_str(
            r#"{
                "id":"6f1c2a53-4b8e-4d52-9f0e-3c1a7b9d2e10",
                "displayName":"Esther N.",
                "roles":[{"role":"Diacre","startDate":"2024-01-01"}]
            }"#,
        );
        assert!(user.is_err());
    }
}
