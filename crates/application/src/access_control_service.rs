use std::sync::Arc;

use ekklesia_core::{AppError, AppResult};
use ekklesia_domain::{
    NavigationTree, PageId, PermissionPolicy, PrimaryRole, RoleName, User, active_roles_on,
    primary_role_on,
};
use tracing::{debug, warn};

use crate::Clock;

mod navigation;
mod summary;

#[cfg(test)]
mod tests;

pub use summary::{RoleHistoryEntry, SessionSummary};

/// Application service answering page access questions for console users.
///
/// Static policy and navigation data are shared by reference; the service
/// itself holds no mutable state.
#[derive(Clone)]
pub struct AccessControlService {
    policy: Arc<PermissionPolicy>,
    navigation: Arc<NavigationTree>,
    clock: Arc<dyn Clock>,
}

impl AccessControlService {
    /// Creates a service after checking the policy against the navigation tree.
    pub fn new(
        policy: Arc<PermissionPolicy>,
        navigation: Arc<NavigationTree>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        policy.validate_against(navigation.as_ref())?;

        Ok(Self {
            policy,
            navigation,
            clock,
        })
    }

    /// Returns the permission map in use.
    #[must_use]
    pub fn policy(&self) -> &PermissionPolicy {
        self.policy.as_ref()
    }

    /// Returns the user's roles that are active today, in assignment order.
    #[must_use]
    pub fn active_roles(&self, user: Option<&User>) -> Vec<RoleName> {
        active_roles_on(user, self.clock.today())
    }

    /// Returns the representative role label for the user.
    #[must_use]
    pub fn primary_role(&self, user: Option<&User>) -> PrimaryRole {
        primary_role_on(user, self.clock.today())
    }

    /// Decides whether the active roles may open `page`.
    #[must_use]
    pub fn has_permission(&self, active_roles: &[RoleName], page: PageId) -> bool {
        let granted = self.policy.has_permission(active_roles, page);
        debug!(
            page = page.as_str(),
            roles = ?active_roles,
            granted,
            "page permission evaluated"
        );

        granted
    }

    /// Ensures the user may open `page` today.
    pub fn require_page_access(&self, user: Option<&User>, page: PageId) -> AppResult<()> {
        let Some(user) = user else {
            warn!(page = page.as_str(), "page access denied without user");
            return Err(AppError::Unauthorized(format!(
                "an authenticated user is required to open page '{page}'"
            )));
        };

        let active_roles = self.active_roles(Some(user));
        if active_roles.is_empty() {
            warn!(
                user_id = %user.id(),
                page = page.as_str(),
                "page access denied without active role"
            );
            return Err(AppError::Unauthorized(format!(
                "user '{}' holds no active role",
                user.id()
            )));
        }

        if self.has_permission(&active_roles, page) {
            return Ok(());
        }

        warn!(
            user_id = %user.id(),
            page = page.as_str(),
            roles = ?active_roles,
            "page access denied"
        );
        Err(AppError::Forbidden(format!(
            "user '{}' is missing access to page '{page}'",
            user.id()
        )))
    }
}
