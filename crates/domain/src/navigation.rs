use std::borrow::Cow;
use std::collections::BTreeSet;

use ekklesia_core::{AppError, AppResult, NonEmptyString};
use serde::Serialize;

use crate::PageId;

/// Icon rendered next to a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationIcon {
    /// Dashboard gauge.
    Dashboard,
    /// Group of people.
    Users,
    /// Child silhouette.
    Baby,
    /// Building.
    Building,
    /// Wallet.
    Wallet,
    /// Bar chart.
    Chart,
    /// Hand holding coins.
    HandCoins,
    /// Folder.
    Folder,
    /// Heart.
    Heart,
    /// Briefcase.
    Briefcase,
    /// Identity badge.
    Badge,
    /// Shield with key.
    Shield,
    /// Megaphone.
    Megaphone,
    /// Speech bubble.
    Message,
    /// Single person.
    User,
    /// Gear.
    Settings,
    /// Crown.
    Crown,
    /// Church.
    Church,
}

impl NavigationIcon {
    /// Returns the icon name understood by the front end.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Baby => "baby",
            Self::Building => "building",
            Self::Wallet => "wallet",
            Self::Chart => "chart",
            Self::HandCoins => "hand-coins",
            Self::Folder => "folder",
            Self::Heart => "heart",
            Self::Briefcase => "briefcase",
            Self::Badge => "badge",
            Self::Shield => "shield",
            Self::Megaphone => "megaphone",
            Self::Message => "message",
            Self::User => "user",
            Self::Settings => "settings",
            Self::Crown => "crown",
            Self::Church => "church",
        }
    }
}

/// One entry of the console sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    id: PageId,
    label: Cow<'static, str>,
    icon: NavigationIcon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sub_items: Vec<NavigationItem>,
}

impl NavigationItem {
    /// Creates a navigation entry with optional children.
    pub fn new(
        id: PageId,
        label: impl Into<String>,
        icon: NavigationIcon,
        sub_items: Vec<NavigationItem>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            label: Cow::Owned(NonEmptyString::new(label)?.into()),
            icon,
            sub_items,
        })
    }

    /// Creates an entry without children from a static label.
    #[must_use]
    pub fn leaf(id: PageId, label: &'static str, icon: NavigationIcon) -> Self {
        Self {
            id,
            label: Cow::Borrowed(label),
            icon,
            sub_items: Vec::new(),
        }
    }

    /// Creates an entry grouping `sub_items`.
    #[must_use]
    pub fn group(
        id: PageId,
        label: &'static str,
        icon: NavigationIcon,
        sub_items: Vec<NavigationItem>,
    ) -> Self {
        Self {
            sub_items,
            ..Self::leaf(id, label, icon)
        }
    }

    /// Returns the page identifier.
    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the icon.
    #[must_use]
    pub fn icon(&self) -> NavigationIcon {
        self.icon
    }

    /// Returns nested entries.
    #[must_use]
    pub fn sub_items(&self) -> &[NavigationItem] {
        self.sub_items.as_slice()
    }

    fn collect_ids(&self, ids: &mut Vec<PageId>) {
        ids.push(self.id);
        for sub_item in &self.sub_items {
            sub_item.collect_ids(ids);
        }
    }

    fn filtered(&self, allowed: &impl Fn(PageId) -> bool) -> Option<Self> {
        if !allowed(self.id) {
            return None;
        }

        if self.sub_items.is_empty() {
            return Some(self.clone());
        }

        let sub_items = self
            .sub_items
            .iter()
            .filter_map(|sub_item| sub_item.filtered(allowed))
            .collect::<Vec<_>>();

        // A section whose children are all hidden has nothing to open.
        if sub_items.is_empty() {
            return None;
        }

        Some(Self {
            id: self.id,
            label: self.label.clone(),
            icon: self.icon,
            sub_items,
        })
    }
}

/// Validated sidebar tree with globally unique page ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    items: Vec<NavigationItem>,
}

impl NavigationTree {
    /// Creates a tree, rejecting duplicate page ids at any depth.
    pub fn new(items: Vec<NavigationItem>) -> AppResult<Self> {
        let mut ids = Vec::new();
        for item in &items {
            item.collect_ids(&mut ids);
        }

        let mut seen = BTreeSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(AppError::Conflict(format!(
                    "navigation page id '{id}' appears more than once"
                )));
            }
        }

        Ok(Self { items })
    }

    /// Returns the console's standard sidebar.
    #[must_use]
    pub fn standard() -> Self {
        use NavigationIcon as Icon;

        Self {
            items: vec![
                NavigationItem::leaf(PageId::Dashboard, "Tableau de bord", Icon::Dashboard),
                NavigationItem::leaf(PageId::Members, "Membres", Icon::Users),
                NavigationItem::leaf(PageId::Children, "Enfants", Icon::Baby),
                NavigationItem::leaf(PageId::Departments, "Départements", Icon::Building),
                NavigationItem::group(
                    PageId::Finances,
                    "Finances",
                    Icon::Wallet,
                    vec![
                        NavigationItem::leaf(
                            PageId::FinancesOverview,
                            "Vue d'ensemble",
                            Icon::Chart,
                        ),
                        NavigationItem::leaf(PageId::Cotisations, "Cotisations", Icon::HandCoins),
                        NavigationItem::leaf(PageId::Projects, "Projets", Icon::Folder),
                        NavigationItem::leaf(PageId::DeathCases, "Cas de décès", Icon::Heart),
                    ],
                ),
                NavigationItem::group(
                    PageId::Personnel,
                    "Personnel",
                    Icon::Briefcase,
                    vec![
                        NavigationItem::leaf(PageId::Staff, "Équipe", Icon::Badge),
                        NavigationItem::leaf(PageId::Roles, "Rôles", Icon::Shield),
                    ],
                ),
                NavigationItem::leaf(PageId::Announcements, "Annonces", Icon::Megaphone),
                NavigationItem::leaf(
                    PageId::InternalMessaging,
                    "Messagerie interne",
                    Icon::Message,
                ),
                NavigationItem::leaf(PageId::Profile, "Mon profil", Icon::User),
                NavigationItem::leaf(PageId::Settings, "Paramètres", Icon::Settings),
                NavigationItem::group(
                    PageId::SuperAdmin,
                    "Super administration",
                    Icon::Crown,
                    vec![
                        NavigationItem::leaf(PageId::Churches, "Églises", Icon::Church),
                        NavigationItem::leaf(
                            PageId::PlatformSettings,
                            "Paramètres de la plateforme",
                            Icon::Settings,
                        ),
                    ],
                ),
            ],
        }
    }

    /// Returns top-level entries in display order.
    #[must_use]
    pub fn items(&self) -> &[NavigationItem] {
        self.items.as_slice()
    }

    /// Returns every page id present in the tree.
    #[must_use]
    pub fn page_ids(&self) -> BTreeSet<PageId> {
        let mut ids = Vec::new();
        for item in &self.items {
            item.collect_ids(&mut ids);
        }

        ids.into_iter().collect()
    }

    /// Finds the entry for `page` at any depth.
    #[must_use]
    pub fn find(&self, page: PageId) -> Option<&NavigationItem> {
        let mut pending = self.items.iter().collect::<Vec<_>>();
        while let Some(item) = pending.pop() {
            if item.id == page {
                return Some(item);
            }
            pending.extend(item.sub_items.iter());
        }

        None
    }

    /// Returns the subtree of entries whose page is allowed.
    ///
    /// An entry is kept only when its own page is allowed; sections whose
    /// children are all filtered out are dropped.
    #[must_use]
    pub fn filter(&self, allowed: impl Fn(PageId) -> bool) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter_map(|item| item.filtered(&allowed))
                .collect(),
        }
    }

    /// Returns whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
