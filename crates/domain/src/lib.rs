//! Domain entities and invariants for console access control.

#![forbid(unsafe_code)]

mod access;
mod assignment;
mod navigation;
mod page;
mod permission;
mod role;
mod user;

pub use access::{FALLBACK_ROLE_LABEL, PrimaryRole, active_roles_on, primary_role_on};
pub use assignment::{ASSIGNMENT_DATE_FORMAT, AssignmentStatus, RoleAssignment};
pub use navigation::{NavigationIcon, NavigationItem, NavigationTree};
pub use page::PageId;
pub use permission::{PagePermissions, PermissionPolicy};
pub use role::{RoleCatalogEntry, RoleName, role_catalog};
pub use user::{User, UserId};
