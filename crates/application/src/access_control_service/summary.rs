use ekklesia_domain::{AssignmentStatus, RoleAssignment, UserId};
use serde::Serialize;

use super::*;

/// Access snapshot of one user, as rendered by the console shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// User the snapshot belongs to, if any.
    pub user_id: Option<UserId>,
    /// Roles active today, in assignment order.
    pub active_roles: Vec<RoleName>,
    /// Header role label.
    pub primary_role: PrimaryRole,
    /// Sidebar entries the user may open.
    pub navigation: NavigationTree,
    /// Every tenure of the user with its status as of today.
    pub role_history: Vec<RoleHistoryEntry>,
}

/// One tenure in a user's role history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleHistoryEntry {
    /// Tenure as stored on the user.
    pub assignment: RoleAssignment,
    /// Position of the tenure relative to today.
    pub status: AssignmentStatus,
}

impl AccessControlService {
    /// Builds the access snapshot for the user as of today.
    #[must_use]
    pub fn session_summary(&self, user: Option<&User>) -> SessionSummary {
        let today = self.clock.today();
        let active_roles = active_roles_on(user, today);
        let navigation = self.navigation_for_roles(&active_roles);
        let role_history = user
            .map(User::role_assignments)
            .unwrap_or_default()
            .iter()
            .map(|assignment| RoleHistoryEntry {
                assignment: assignment.clone(),
                status: assignment.status_on(today),
            })
            .collect();

        SessionSummary {
            user_id: user.map(User::id),
            primary_role: primary_role_on(user, today),
            active_roles,
            navigation,
            role_history,
        }
    }
}
