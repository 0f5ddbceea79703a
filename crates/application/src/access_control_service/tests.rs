use std::sync::Arc;

use chrono::NaiveDate;
use ekklesia_core::AppError;
use ekklesia_domain::{
    AssignmentStatus, NavigationIcon, NavigationItem, NavigationTree, PageId, PermissionPolicy,
    PrimaryRole, RoleAssignment, RoleName, User, UserId,
};

use crate::FixedClock;

use super::AccessControlService;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap_or_default()
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
}

fn service() -> AccessControlService {
    AccessControlService::new(
        Arc::new(PermissionPolicy::standard()),
        Arc::new(NavigationTree::standard()),
        Arc::new(FixedClock::new(today())),
    )
    .unwrap_or_else(|_| panic!("test"))
}

fn user_with(roles: &[(RoleName, &str, Option<&str>)]) -> User {
    let assignments = roles
        .iter()
        .map(|(role, start, end)| {
            RoleAssignment::new(*role, date(start), end.map(date))
                .unwrap_or_else(|_| panic!("test"))
        })
        .collect();

    User::new(UserId::new(), "Jean-Paul M.", assignments).unwrap_or_else(|_| panic!("test"))
}

#[test]
fn construction_rejects_policy_not_covered_by_navigation() {
    let navigation = NavigationTree::new(vec![NavigationItem::leaf(
        PageId::Profile,
        "Mon profil",
        NavigationIcon::User,
    )])
    .unwrap_or_else(|_| panic!("test"));

    let service = AccessControlService::new(
        Arc::new(PermissionPolicy::standard()),
        Arc::new(navigation),
        Arc::new(FixedClock::new(today())),
    );
    assert!(matches!(service, Err(AppError::Validation(_))));
}

#[test]
fn active_roles_use_the_injected_clock() {
    let user = user_with(&[
        (RoleName::Secretary, "2020-01-01", Some("2026-10-17")),
        (RoleName::Treasurer, "2026-10-18", None),
    ]);

    let service = service();
    assert_eq!(service.active_roles(Some(&user)), vec![RoleName::Secretary]);

    let tomorrow = AccessControlService::new(
        Arc::new(PermissionPolicy::standard()),
        Arc::new(NavigationTree::standard()),
        Arc::new(FixedClock::new(date("2026-10-18"))),
    )
    .unwrap_or_else(|_| panic!("test"));
    assert_eq!(tomorrow.active_roles(Some(&user)), vec![RoleName::Treasurer]);
}

#[test]
fn primary_role_falls_back_to_expired_assignment() {
    let user = user_with(&[(RoleName::Treasurer, "2015-01-01", Some("2020-01-01"))]);
    let service = service();

    assert!(service.active_roles(Some(&user)).is_empty());
    assert_eq!(
        service.primary_role(Some(&user)),
        PrimaryRole::Role(RoleName::Treasurer)
    );
    assert_eq!(service.primary_role(None).as_str(), "Utilisateur");
}

#[test]
fn require_page_access_distinguishes_denial_kinds() {
    let service = service();
    let secretary = user_with(&[(RoleName::Secretary, "2022-01-01", None)]);
    let retired = user_with(&[(RoleName::Treasurer, "2015-01-01", Some("2020-01-01"))]);

    assert!(
        service
            .require_page_access(Some(&secretary), PageId::Members)
            .is_ok()
    );
    assert!(matches!(
        service.require_page_access(Some(&secretary), PageId::FinancesOverview),
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.require_page_access(Some(&retired), PageId::Profile),
        Err(AppError::Unauthorized(_))
    ));
    assert!(matches!(
        service.require_page_access(None, PageId::Profile),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn treasurer_sees_finance_section_and_baseline_pages() {
    let service = service();
    let treasurer = user_with(&[(RoleName::Treasurer, "2024-01-01", None)]);

    let navigation = service.visible_navigation(Some(&treasurer));
    let top_level = navigation
        .items()
        .iter()
        .map(|item| item.id())
        .collect::<Vec<_>>();
    assert_eq!(
        top_level,
        vec![
            PageId::Dashboard,
            PageId::Finances,
            PageId::Announcements,
            PageId::InternalMessaging,
            PageId::Profile,
        ]
    );

    let finance_pages = navigation
        .find(PageId::Finances)
        .map(|item| item.sub_items().len())
        .unwrap_or_default();
    assert_eq!(finance_pages, 4);
}

#[test]
fn administrator_sees_the_whole_tree() {
    let service = service();
    let admin = user_with(&[(RoleName::PrincipalAdministrator, "2019-05-01", None)]);

    let navigation = service.visible_navigation(Some(&admin));
    assert_eq!(navigation, NavigationTree::standard());
}

#[test]
fn user_without_active_role_sees_nothing() {
    let service = service();
    let scheduled = user_with(&[(RoleName::Pastor, "2027-01-01", None)]);

    assert!(service.visible_navigation(Some(&scheduled)).is_empty());
    assert!(service.visible_navigation(None).is_empty());
}

#[test]
fn session_summary_combines_roles_label_and_navigation() {
    let service = service();
    let user = user_with(&[
        (RoleName::Treasurer, "2023-01-01", None),
        (RoleName::Secretary, "2023-01-01", None),
    ]);

    let summary = service.session_summary(Some(&user));
    assert_eq!(summary.user_id, Some(user.id()));
    assert_eq!(
        summary.active_roles,
        vec![RoleName::Treasurer, RoleName::Secretary]
    );
    assert_eq!(summary.primary_role, PrimaryRole::Role(RoleName::Treasurer));
    assert!(summary.navigation.find(PageId::Members).is_some());
    assert!(summary.navigation.find(PageId::Cotisations).is_some());
    assert!(summary.navigation.find(PageId::Roles).is_none());
}

#[test]
fn session_summary_classifies_role_history() {
    let service = service();
    let user = user_with(&[
        (RoleName::Secretary, "2019-01-01", Some("2023-12-31")),
        (RoleName::Treasurer, "2024-01-01", None),
        (RoleName::ChildrenCoordinator, "2027-01-01", None),
    ]);

    let history = service
        .session_summary(Some(&user))
        .role_history
        .into_iter()
        .map(|entry| (entry.assignment.role(), entry.status))
        .collect::<Vec<_>>();
    assert_eq!(
        history,
        vec![
            (RoleName::Secretary, AssignmentStatus::Expired),
            (RoleName::Treasurer, AssignmentStatus::Active),
            (RoleName::ChildrenCoordinator, AssignmentStatus::Scheduled),
        ]
    );
    assert!(service.session_summary(None).role_history.is_empty());
}
