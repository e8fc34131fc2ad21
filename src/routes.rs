//! Route table shared by the router and the shell

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const ROOT_PATH: &str = "/";

/// Authenticated pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    AutoChat,
    AutoScan,
    AutoCheck,
    AutoCompanion,
    Settings,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 5] = [
        Page::AutoChat,
        Page::AutoScan,
        Page::AutoCheck,
        Page::AutoCompanion,
        Page::Settings,
    ];

    /// Landing page after signup, after login without a redirect target, and for `/`
    pub const LANDING: Page = Page::AutoChat;

    fn entry(self) -> &'static RouteEntry {
        // ROUTE_TABLE is indexed in `Page::ALL` order
        &ROUTE_TABLE[self as usize]
    }

    pub fn id(self) -> &'static str {
        &self.entry().path[1..]
    }

    pub fn path(self) -> &'static str {
        self.entry().path
    }

    pub fn title(self) -> &'static str {
        self.entry().title
    }

    pub fn requires_auth(self) -> bool {
        self.entry().requires_auth
    }
}

#[derive(Debug)]
pub struct RouteEntry {
    pub page: Page,
    pub path: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
}

pub static ROUTE_TABLE: [RouteEntry; 5] = [
    RouteEntry {
        page: Page::AutoChat,
        path: "/autochat",
        title: "AutoChat",
        requires_auth: true,
    },
    RouteEntry {
        page: Page::AutoScan,
        path: "/autoscan",
        title: "AutoScan",
        requires_auth: true,
    },
    RouteEntry {
        page: Page::AutoCheck,
        path: "/autocheck",
        title: "AutoCheck",
        requires_auth: true,
    },
    RouteEntry {
        page: Page::AutoCompanion,
        path: "/autocompanion",
        title: "AutoCompanion",
        requires_auth: true,
    },
    RouteEntry {
        page: Page::Settings,
        path: "/settings",
        title: "Settings",
        requires_auth: true,
    },
];

/// Strip a trailing slash, keeping `/` itself.
pub fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(stripped) => stripped,
    }
}

pub fn page_for_path(path: &str) -> Option<Page> {
    let path = normalize(path);
    ROUTE_TABLE
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.page)
}

/// Header title for a path. Unmapped paths yield an empty title.
pub fn page_title(path: &str) -> &'static str {
    page_for_path(path).map(Page::title).unwrap_or("")
}

pub fn is_auth_path(path: &str) -> bool {
    matches!(normalize(path), LOGIN_PATH | SIGNUP_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_page_order() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(ROUTE_TABLE[i].page, *page);
        }
    }

    #[test]
    fn test_page_ids_and_titles() {
        assert_eq!(Page::AutoChat.id(), "autochat");
        assert_eq!(Page::AutoCompanion.path(), "/autocompanion");
        assert_eq!(page_title("/autoscan"), "AutoScan");
        assert_eq!(page_title("/settings"), "Settings");
        assert!(Page::ALL.iter().all(|p| p.requires_auth()));
    }

    #[test]
    fn test_unmapped_path_has_empty_title() {
        assert_eq!(page_title("/nowhere"), "");
        assert_eq!(page_title(""), "");
        assert_eq!(page_title("/login"), "");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(page_for_path("/autocheck/"), Some(Page::AutoCheck));
        assert_eq!(normalize("/"), "/");
        assert!(is_auth_path("/signup/"));
    }
}
