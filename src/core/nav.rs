//! Session identity and role-filtered navigation.

use crate::errors::{AppError, AppResult};
use crate::models::UserRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Who is using the console. Passed explicitly to everything that filters
/// by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user: UserProfile,
}

impl SessionContext {
    pub fn new(name: &str, email: &str, role: UserRole) -> Self {
        Self {
            user: UserProfile {
                name: name.to_string(),
                email: email.to_string(),
                role,
            },
        }
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    pub fn can_open(&self, page: Page) -> bool {
        page.roles().contains(&self.role())
    }

    pub fn require(&self, page: Page) -> AppResult<()> {
        if self.can_open(page) {
            Ok(())
        } else {
            Err(AppError::PermissionDenied {
                role: self.role().to_string(),
                page: page.label().to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    WorkLog,
    Attendance,
    Reports,
    Settings,
}

const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Manager, UserRole::Worker];
const SUPERVISORS: &[UserRole] = &[UserRole::Admin, UserRole::Manager];
const ADMINS: &[UserRole] = &[UserRole::Admin];

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::WorkLog,
        Page::Attendance,
        Page::Reports,
        Page::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::WorkLog => "Work Log",
            Page::Attendance => "Attendance",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Dashboard => "/admin/dashboard",
            Page::WorkLog => "/admin/work-log",
            Page::Attendance => "/admin/attendance",
            Page::Reports => "/admin/reports",
            Page::Settings => "/admin/settings",
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Page::WorkLog => Some("New"),
            _ => None,
        }
    }

    pub fn roles(&self) -> &'static [UserRole] {
        match self {
            Page::Dashboard | Page::WorkLog => ALL_ROLES,
            Page::Attendance | Page::Reports => SUPERVISORS,
            Page::Settings => ADMINS,
        }
    }

    /// Settings lives in the sidebar footer, apart from the main menu.
    pub fn is_footer(&self) -> bool {
        matches!(self, Page::Settings)
    }
}

/// Main menu entries visible to the session user, in menu order.
pub fn visible_pages(ctx: &SessionContext) -> Vec<Page> {
    Page::ALL
        .iter()
        .copied()
        .filter(|p| !p.is_footer() && ctx.can_open(*p))
        .collect()
}

pub fn can_view_settings(ctx: &SessionContext) -> bool {
    ctx.can_open(Page::Settings)
}
