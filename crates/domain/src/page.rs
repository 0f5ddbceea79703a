use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ekklesia_core::AppError;
use serde::{Deserialize, Serialize};

/// Navigable pages and sections of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageId {
    /// Landing dashboard.
    Dashboard,
    /// Member registry.
    Members,
    /// Children's ministry registry.
    Children,
    /// Departments and ministries.
    Departments,
    /// Finance section.
    Finances,
    /// Finance overview dashboard.
    FinancesOverview,
    /// Member cotisations.
    Cotisations,
    /// Funded church projects.
    Projects,
    /// Death-case support funds.
    DeathCases,
    /// Personnel section.
    Personnel,
    /// Staff directory.
    Staff,
    /// Role assignments.
    Roles,
    /// Church announcements.
    Announcements,
    /// Internal messaging between staff.
    InternalMessaging,
    /// Own profile.
    Profile,
    /// Church settings.
    Settings,
    /// Super-admin control panel section.
    SuperAdmin,
    /// Church tenants managed by the platform.
    Churches,
    /// Platform-wide settings.
    PlatformSettings,
}

impl PageId {
    /// Returns the stable page identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Members => "members",
            Self::Children => "children",
            Self::Departments => "departments",
            Self::Finances => "finances",
            Self::FinancesOverview => "finances-overview",
            Self::Cotisations => "cotisations",
            Self::Projects => "projects",
            Self::DeathCases => "death-cases",
            Self::Personnel => "personnel",
            Self::Staff => "staff",
            Self::Roles => "roles",
            Self::Announcements => "announcements",
            Self::InternalMessaging => "internal-messaging",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::SuperAdmin => "super-admin",
            Self::Churches => "churches",
            Self::PlatformSettings => "platform-settings",
        }
    }

    /// Returns all known pages.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[PageId] = &[
            PageId::Dashboard,
            PageId::Members,
            PageId::Children,
            PageId::Departments,
            PageId::Finances,
            PageId::FinancesOverview,
            PageId::Cotisations,
            PageId::Projects,
            PageId::DeathCases,
            PageId::Personnel,
            PageId::Staff,
            PageId::Roles,
            PageId::Announcements,
            PageId::InternalMessaging,
            PageId::Profile,
            PageId::Settings,
            PageId::SuperAdmin,
            PageId::Churches,
            PageId::PlatformSettings,
        ];

        ALL
    }

    /// Parses a transport value into a page identifier.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for PageId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|page| page.as_str() == value.trim())
            .ok_or_else(|| AppError::Validation(format!("unknown page id '{value}'")))
    }
}

impl TryFrom<String> for PageId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<PageId> for String {
    fn from(value: PageId) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for PageId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::PageId;

    #[test]
    fn every_page_roundtrips_through_its_identifier() {
        for page in PageId::all() {
            assert_eq!(PageId::from_str(page.as_str()).ok(), Some(*page));
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert!(PageId::from_str("finance-overview").is_err());
        assert!(PageId::from_transport("Dashboard").is_err());
    }

    #[test]
    fn page_parsing_ignores_surrounding_whitespace() {
        assert_eq!(
            PageId::from_transport(" death-cases\n").ok(),
            Some(PageId::DeathCases)
        );
        assert!(PageId::from_transport("death cases").is_err());
    }
}
