//! Role gating for dashboard pages and API groups.
//!
//! A page is opened only when the current role is in its allow-list.
//! Everything here is a static lookup.

use serde::Serialize;
use std::str::FromStr;

use crate::entities::Role;
use crate::middleware::logging::LOGIN_PAGE;

pub const ANY_ROLE: &[Role] = &Role::ALL;
pub const MANAGEMENT: &[Role] = &[Role::Admin, Role::Operation];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const KITCHEN: &[Role] = &[Role::Admin, Role::Staff, Role::Operation];
pub const FLOOR: &[Role] = &[Role::Admin, Role::Operation, Role::Waiter];

#[derive(Clone, Copy, Debug)]
pub struct PageRoute {
    pub path: &'static str,
    pub roles: &'static [Role],
}

const fn page(path: &'static str, roles: &'static [Role]) -> PageRoute {
    PageRoute { path, roles }
}

/// Order matters: a role's landing page is the first entry it may open.
pub static PAGES: &[PageRoute] = &[
    page("/Dashboard", MANAGEMENT),
    page("/add-ingredient", MANAGEMENT),
    page("/staff", ADMIN_ONLY),
    page("/add-staff", ADMIN_ONLY),
    page("/product/:id", MANAGEMENT),
    page("/subcategory/:id", MANAGEMENT),
    page("/ingredients/:id", MANAGEMENT),
    page("/category/:id", MANAGEMENT),
    page("/subcategoryDetails/:id", MANAGEMENT),
    page("/categoryDetails/:id", MANAGEMENT),
    page("/edit-staff/:id", ADMIN_ONLY),
    page("/service", MANAGEMENT),
    page("/add-category", MANAGEMENT),
    page("/add-sub-category", MANAGEMENT),
    page("/add-dish", MANAGEMENT),
    page("/inventory", MANAGEMENT),
    page("/kitchen", KITCHEN),
    page("/section", KITCHEN),
    page("/section-tables/:id", KITCHEN),
    page("/offer", MANAGEMENT),
    page("/kitchen/:id", KITCHEN),
    page("/follow-order", FLOOR),
    page("/menu", MANAGEMENT),
    page("/orders-tables", FLOOR),
    page("/make-order", FLOOR),
    page("/table", FLOOR),
    page("/reports", MANAGEMENT),
    page("/reservation", MANAGEMENT),
    page("/managment", MANAGEMENT),
];

pub fn is_allowed(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

/// First page in table order the role may open.
pub fn landing_page(role: Role) -> &'static str {
    PAGES
        .iter()
        .find(|page| is_allowed(role, page.roles))
        .map(|page| page.path)
        .unwrap_or(LOGIN_PAGE)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "access", content = "redirect", rename_all = "snake_case")]
pub enum PageAccess {
    Allowed,
    Redirect(String),
    NotFound,
}

/// Decides whether a page opens for `role`; `None` means nobody is signed in.
pub fn check_page(role: Option<&str>, path: &str) -> PageAccess {
    let Some(role) = role else {
        return PageAccess::Redirect(LOGIN_PAGE.to_owned());
    };
    let Some(route) = find_page(path) else {
        return PageAccess::NotFound;
    };
    match Role::from_str(role) {
        Ok(role) if is_allowed(role, route.roles) => PageAccess::Allowed,
        Ok(role) => PageAccess::Redirect(landing_page(role).to_owned()),
        Err(_) => PageAccess::Redirect(LOGIN_PAGE.to_owned()),
    }
}

pub fn find_page(path: &str) -> Option<&'static PageRoute> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    PAGES.iter().find(|page| matches_pattern(page.path, path))
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    let mut expected = pattern.split('/').filter(|s| !s.is_empty());
    let mut actual = path.split('/').filter(|s| !s.is_empty());
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) => {
                if !want.starts_with(':') && !want.eq_ignore_ascii_case(got) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NavEntry {
    pub title: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
    #[serde(skip)]
    pub access: &'static [Role],
}

static NAVIGATION: &[NavEntry] = &[
    NavEntry { title: "Menu Display", icon: "BookOpen", link: "/menu", access: ADMIN_ONLY },
    NavEntry { title: "Categories", icon: "Menu", link: "/categories", access: ADMIN_ONLY },
    NavEntry { title: "Products", icon: "Package", link: "/products", access: ADMIN_ONLY },
    NavEntry { title: "Reviews", icon: "MessageSquare", link: "/reviews", access: ADMIN_ONLY },
    NavEntry { title: "Offers", icon: "discount", link: "/offer", access: ADMIN_ONLY },
];

/// Sidebar entries visible to `role`, in display order.
pub fn navigation(role: Role) -> Vec<NavEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| is_allowed(role, entry.access))
        .copied()
        .collect()
}
