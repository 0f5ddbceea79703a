//! Pure access resolution over a user's role history.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{RoleName, User};

/// Label shown for users without any role assignment.
pub const FALLBACK_ROLE_LABEL: &str = "Utilisateur";

/// Representative role shown in the console header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum PrimaryRole {
    /// A role taken from the user's assignments.
    Role(RoleName),
    /// Generic label for absent users or users with no assignment.
    Fallback,
}

impl PrimaryRole {
    /// Returns the display label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role(role) => role.as_str(),
            Self::Fallback => FALLBACK_ROLE_LABEL,
        }
    }

    /// Returns the role, unless this is the fallback label.
    #[must_use]
    pub fn role(&self) -> Option<RoleName> {
        match self {
            Self::Role(role) => Some(*role),
            Self::Fallback => None,
        }
    }
}

impl From<PrimaryRole> for String {
    fn from(value: PrimaryRole) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for PrimaryRole {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returns roles whose assignment covers `today`, in assignment order.
#[must_use]
pub fn active_roles_on(user: Option<&User>, today: NaiveDate) -> Vec<RoleName> {
    let Some(user) = user else {
        return Vec::new();
    };

    user.role_assignments()
        .iter()
        .filter(|assignment| assignment.is_active_on(today))
        .map(|assignment| assignment.role())
        .collect()
}

/// Picks the role label to display for `user` on `today`.
#[must_use]
pub fn primary_role_on(user: Option<&User>, today: NaiveDate) -> PrimaryRole {
    let Some(user) = user else {
        return PrimaryRole::Fallback;
    };

    // First assignment in list order wins; there is no seniority ranking
    // between roles, so this tie-break is arbitrary but deliberate.
    if let Some(role) = active_roles_on(Some(user), today).first() {
        return PrimaryRole::Role(*role);
    }

    user.role_assignments()
        .first()
        .map(|assignment| PrimaryRole::Role(assignment.role()))
        .unwrap_or(PrimaryRole::Fallback)
}
