use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ekklesia_core::AppError;
use serde::{Deserialize, Serialize};

/// Named roles a staff member can hold in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoleName {
    /// Church-level administrator with full access.
    PrincipalAdministrator,
    /// Platform operator across every church tenant.
    SuperAdministrator,
    /// Pastor overseeing the congregation.
    Pastor,
    /// Secretary managing member records.
    Secretary,
    /// Treasurer managing church finances.
    Treasurer,
    /// Head of a department or ministry.
    DepartmentHead,
    /// Coordinator of the children's ministry.
    ChildrenCoordinator,
    /// Staff member in charge of communication.
    CommunicationOfficer,
    /// Manager of personnel and role assignments.
    PersonnelManager,
    /// Plain member account.
    Member,
}

impl RoleName {
    /// Returns the stable display and storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrincipalAdministrator => "Administrateur principal",
            Self::SuperAdministrator => "Super Administrateur",
            Self::Pastor => "Pasteur",
            Self::Secretary => "Secrétaire",
            Self::Treasurer => "Trésorier",
            Self::DepartmentHead => "Responsable de département",
            Self::ChildrenCoordinator => "Responsable des enfants",
            Self::CommunicationOfficer => "Chargé de communication",
            Self::PersonnelManager => "Gestionnaire du personnel",
            Self::Member => "Membre",
        }
    }

    /// Returns the catalog description of this role.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::PrincipalAdministrator => {
                "Administre l'église et dispose d'un accès complet à la console"
            }
            Self::SuperAdministrator => {
                "Supervise toutes les églises de la plateforme et leurs abonnements"
            }
            Self::Pastor => "Suit la vie de l'assemblée, les membres et les départements",
            Self::Secretary => "Tient le registre des membres, des enfants et des départements",
            Self::Treasurer => "Gère les cotisations, les projets et les cas de décès",
            Self::DepartmentHead => "Anime un département ou un ministère et ses membres",
            Self::ChildrenCoordinator => "Coordonne le ministère des enfants",
            Self::CommunicationOfficer => "Publie les annonces de l'église",
            Self::PersonnelManager => "Gère le personnel et l'attribution des rôles",
            Self::Member => "Compte membre sans fonction administrative",
        }
    }

    /// Returns all known roles in catalog order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RoleName] = &[
            RoleName::PrincipalAdministrator,
            RoleName::SuperAdministrator,
            RoleName::Pastor,
            RoleName::Secretary,
            RoleName::Treasurer,
            RoleName::DepartmentHead,
            RoleName::ChildrenCoordinator,
            RoleName::CommunicationOfficer,
            RoleName::PersonnelManager,
            RoleName::Member,
        ];

        ALL
    }

    /// Parses a transport value into a role name.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for RoleName {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value.trim())
            .ok_or_else(|| AppError::Validation(format!("unknown role name '{value}'")))
    }
}

impl TryFrom<String> for RoleName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<RoleName> for String {
    fn from(value: RoleName) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for RoleName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One row of the role catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleCatalogEntry {
    /// Catalogued role.
    pub role: RoleName,
    /// Human-readable description.
    pub description: &'static str,
}

/// Returns the role catalog in display order.
#[must_use]
pub fn role_catalog() -> Vec<RoleCatalogEntry> {
    RoleName::all()
        .iter()
        .map(|role| RoleCatalogEntry {
            role: *role,
            description: role.description(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::{RoleName, role_catalog};

    #[test]
    fn role_roundtrip_storage_value() {
        let role = RoleName::Treasurer;
        let restored = RoleName::from_str(role.as_str());
        assert!(restored.is_ok());
        assert_eq!(restored.unwrap_or(RoleName::Member), role);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(RoleName::from_str("Trésoriere").is_err());
        assert!(RoleName::from_str("").is_err());
    }

    #[test]
    fn role_parsing_ignores_surrounding_whitespace() {
        let parsed = RoleName::from_transport("  Secrétaire ");
        assert_eq!(parsed.unwrap_or(RoleName::Member), RoleName::Secretary);
    }

    #[test]
    fn catalog_lists_every_role_once() {
        let catalog = role_catalog();
        let unique: HashSet<_> = catalog.iter().map(|entry| entry.role).collect();
        assert_eq!(catalog.len(), RoleName::all().len());
        assert_eq!(unique.len(), catalog.len());
        assert!(catalog.iter().all(|entry| !entry.description.is_empty()));
    }

    #[test]
    fn role_serializes_as_display_label() {
        let json = serde_json::to_string(&RoleName::PrincipalAdministrator);
        assert_eq!(
            json.unwrap_or_default(),
            "\"Administrateur principal\"".to_owned()
        );

        let parsed: Result<RoleName, _> = serde_json::from_str("\"Pasteur\"");
        assert!(matches!(parsed, Ok(RoleName::Pastor)));
    }
}
