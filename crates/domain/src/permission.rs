//! Role to page permission map.

use std::collections::{BTreeMap, BTreeSet};

use ekklesia_core::{AppError, AppResult};
use serde::Serialize;

use crate::{NavigationTree, PageId, RoleName};

/// Pages reachable through one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "pages")]
pub enum PagePermissions {
    /// Wildcard granting every page, including pages added later.
    All,
    /// Explicit set of pages.
    Pages(BTreeSet<PageId>),
}

impl PagePermissions {
    /// Builds an explicit page set.
    #[must_use]
    pub fn pages(pages: impl IntoIterator<Item = PageId>) -> Self {
        Self::Pages(pages.into_iter().collect())
    }

    /// Returns whether this grant covers `page`.
    #[must_use]
    pub fn allows(&self, page: PageId) -> bool {
        match self {
            Self::All => true,
            Self::Pages(pages) => pages.contains(&page),
        }
    }

    /// Returns whether this grant is the wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Immutable role to page permission map plus baseline pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPolicy {
    grants: BTreeMap<RoleName, PagePermissions>,
    baseline_pages: BTreeSet<PageId>,
}

impl PermissionPolicy {
    /// Creates a policy from explicit grants and baseline pages.
    #[must_use]
    pub fn new(
        grants: impl IntoIterator<Item = (RoleName, PagePermissions)>,
        baseline_pages: impl IntoIterator<Item = PageId>,
    ) -> Self {
        Self {
            grants: grants.into_iter().collect(),
            baseline_pages: baseline_pages.into_iter().collect(),
        }
    }

    /// Returns the console's standard permission map.
    ///
    /// `Membre` is intentionally absent and therefore only reaches baseline
    /// pages.
    #[must_use]
    pub fn standard() -> Self {
        use PageId::*;

        Self::new(
            [
                (RoleName::PrincipalAdministrator, PagePermissions::All),
                (RoleName::SuperAdministrator, PagePermissions::All),
                (
                    RoleName::Pastor,
                    PagePermissions::pages([
                        Dashboard,
                        Members,
                        Children,
                        Departments,
                        Finances,
                        FinancesOverview,
                        Personnel,
                        Staff,
                    ]),
                ),
                (
                    RoleName::Secretary,
                    PagePermissions::pages([Dashboard, Members, Children, Departments]),
                ),
                (
                    RoleName::Treasurer,
                    PagePermissions::pages([
                        Dashboard,
                        Finances,
                        FinancesOverview,
                        Cotisations,
                        Projects,
                        DeathCases,
                    ]),
                ),
                (
                    RoleName::DepartmentHead,
                    PagePermissions::pages([Dashboard, Members, Departments]),
                ),
                (
                    RoleName::ChildrenCoordinator,
                    PagePermissions::pages([Dashboard, Children]),
                ),
                (
                    RoleName::CommunicationOfficer,
                    PagePermissions::pages([Dashboard, Announcements]),
                ),
                (
                    RoleName::PersonnelManager,
                    PagePermissions::pages([Dashboard, Personnel, Staff, Roles]),
                ),
            ],
            [InternalMessaging, Profile, Announcements],
        )
    }

    /// Returns the explicit grant for `role`, if the role is mapped.
    #[must_use]
    pub fn grants_for(&self, role: RoleName) -> Option<&PagePermissions> {
        self.grants.get(&role)
    }

    /// Returns the pages every authenticated user may open.
    #[must_use]
    pub fn baseline_pages(&self) -> &BTreeSet<PageId> {
        &self.baseline_pages
    }

    /// Decides whether the given active roles may open `page`.
    ///
    /// An empty role list never grants access. A wildcard grant is checked
    /// before any page-specific rule, then baseline pages, then the explicit
    /// page sets of each role (logical OR).
    #[must_use]
    pub fn has_permission(&self, active_roles: &[RoleName], page: PageId) -> bool {
        if active_roles.is_empty() {
            return false;
        }

        let grants = active_roles
            .iter()
            .filter_map(|role| self.grants.get(role))
            .collect::<Vec<_>>();

        if grants.iter().any(|grant| grant.is_wildcard()) {
            return true;
        }

        if self.baseline_pages.contains(&page) {
            return true;
        }

        grants.iter().any(|grant| grant.allows(page))
    }

    /// Returns every page named by explicit grants or baseline pages.
    #[must_use]
    pub fn referenced_pages(&self) -> BTreeSet<PageId> {
        let mut pages = self.baseline_pages.clone();
        for grant in self.grants.values() {
            if let PagePermissions::Pages(explicit) = grant {
                pages.extend(explicit.iter().copied());
            }
        }

        pages
    }

    /// Ensures every referenced page is reachable through `navigation`.
    pub fn validate_against(&self, navigation: &NavigationTree) -> AppResult<()> {
        let navigable = navigation.page_ids();
        let missing = self
            .referenced_pages()
            .into_iter()
            .filter(|page| !navigable.contains(page))
            .map(|page| page.as_str())
            .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "permission map references pages missing from navigation: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
