use chrono::NaiveDate;
use ekklesia_application::{RoleHistoryEntry, SessionSummary};
use ekklesia_domain::{NavigationItem, PagePermissions, PermissionPolicy, User, role_catalog};
use serde::Serialize;
use ts_rs::TS;

/// Access report for every known user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/console-types/src/generated/access-report-response.ts"
)]
pub struct AccessReportResponse {
    pub generated_on: String,
    pub users: Vec<UserAccessResponse>,
}

/// Access snapshot of one user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/console-types/src/generated/user-access-response.ts"
)]
pub struct UserAccessResponse {
    pub user_id: String,
    pub display_name: String,
    pub primary_role: String,
    pub active_roles: Vec<String>,
    pub navigation: Vec<NavigationEntryResponse>,
    pub role_history: Vec<RoleHistoryEntryResponse>,
}

/// One tenure in a user's role history.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/console-types/src/generated/role-history-entry-response.ts"
)]
pub struct RoleHistoryEntryResponse {
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
}

/// Sidebar entry visible to a user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/console-types/src/generated/navigation-entry-response.ts"
)]
pub struct NavigationEntryResponse {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub sub_items: Vec<NavigationEntryResponse>,
}

/// Role catalog entry with its page grants.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/console-types/src/generated/role-catalog-entry-response.ts"
)]
pub struct RoleCatalogEntryResponse {
    pub role: String,
    pub description: String,
    pub all_pages: bool,
    pub pages: Vec<String>,
}

impl AccessReportResponse {
    pub fn new(today: NaiveDate, users: Vec<UserAccessResponse>) -> Self {
        Self {
            generated_on: today.to_string(),
            users,
        }
    }
}

impl UserAccessResponse {
    pub fn from_summary(user: &User, summary: SessionSummary) -> Self {
        Self {
            user_id: user.id().to_string(),
            display_name: user.display_name().as_str().to_owned(),
            primary_role: summary.primary_role.as_str().to_owned(),
            active_roles: summary
                .active_roles
                .iter()
                .map(|role| role.as_str().to_owned())
                .collect(),
            navigation: summary
                .navigation
                .items()
                .iter()
                .map(NavigationEntryResponse::from)
                .collect(),
            role_history: summary
                .role_history
                .iter()
                .map(RoleHistoryEntryResponse::from)
                .collect(),
        }
    }
}

impl From<&RoleHistoryEntry> for RoleHistoryEntryResponse {
    fn from(value: &RoleHistoryEntry) -> Self {
        Self {
            role: value.assignment.role().as_str().to_owned(),
            start_date: value.assignment.start_date().to_string(),
            end_date: value
                .assignment
                .end_date()
                .map(|end_date| end_date.to_string()),
            status: value.status.as_str().to_owned(),
        }
    }
}

impl From<&NavigationItem> for NavigationEntryResponse {
    fn from(value: &NavigationItem) -> Self {
        Self {
            id: value.id().as_str().to_owned(),
            label: value.label().to_owned(),
            icon: value.icon().as_str().to_owned(),
            sub_items: value.sub_items().iter().map(Self::from).collect(),
        }
    }
}

/// Builds the role catalog listing, including pages granted by each role.
///
/// Unmapped roles list only the baseline pages.
pub fn role_catalog_response(policy: &PermissionPolicy) -> Vec<RoleCatalogEntryResponse> {
    role_catalog()
        .into_iter()
        .map(|entry| {
            let grant = policy.grants_for(entry.role);
            let mut pages = policy.baseline_pages().clone();
            if let Some(PagePermissions::Pages(explicit)) = grant {
                pages.extend(explicit.iter().copied());
            }

            RoleCatalogEntryResponse {
                role: entry.role.as_str().to_owned(),
                description: entry.description.to_owned(),
                all_pages: grant.is_some_and(PagePermissions::is_wildcard),
                pages: pages.iter().map(|page| page.as_str().to_owned()).collect(),
            }
        })
        .collect()
}
