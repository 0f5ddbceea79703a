use super::*;

impl AccessControlService {
    /// Returns the sidebar entries the user may open today.
    #[must_use]
    pub fn visible_navigation(&self, user: Option<&User>) -> NavigationTree {
        let active_roles = self.active_roles(user);
        self.navigation_for_roles(&active_roles)
    }

    pub(super) fn navigation_for_roles(&self, active_roles: &[RoleName]) -> NavigationTree {
        self.navigation
            .filter(|page| self.policy.has_permission(active_roles, page))
    }
}
