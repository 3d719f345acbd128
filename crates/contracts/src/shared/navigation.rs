use serde::{Deserialize, Serialize};

/// Top-level page of the admin app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    Products,
    Vendors,
    Categories,
}

impl Page {
    /// Sidebar entries in display order
    pub const MENU: [Page; 4] = [Page::Dashboard, Page::Products, Page::Vendors, Page::Categories];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::Vendors => "vendors",
            Page::Categories => "categories",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Admin Login",
            Page::Dashboard => "Dashboard",
            Page::Products => "Products",
            Page::Vendors => "Vendors",
            Page::Categories => "Categories",
        }
    }

    /// Icon name for the sidebar
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Login => "lock",
            Page::Dashboard => "bar-chart",
            Page::Products => "package",
            Page::Vendors => "users",
            Page::Categories => "tag",
        }
    }

    /// The login page is rendered without the sidebar
    pub fn shows_sidebar(&self) -> bool {
        !matches!(self, Page::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_excludes_login() {
        assert!(!Page::MENU.contains(&Page::Login));
        assert!(Page::MENU.iter().all(|p| p.shows_sidebar()));
        assert!(!Page::Login.shows_sidebar());
    }

    #[test]
    fn test_keys_match_serde_names() {
        for page in [Page::Login, Page::Dashboard, Page::Products, Page::Vendors, Page::Categories] {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.key()));
        }
    }
}
