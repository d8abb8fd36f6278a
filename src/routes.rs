pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const SKILLS: &str = "/skills";
pub const SERVICES: &str = "/services";
pub const PROJECTS: &str = "/projects";
pub const REVIEWS: &str = "/reviews";
pub const CONTACT: &str = "/contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { name: "Home", path: HOME },
    NavItem { name: "About", path: ABOUT },
    NavItem { name: "Skills", path: SKILLS },
    NavItem { name: "Services", path: SERVICES },
    NavItem { name: "Projects", path: PROJECTS },
    NavItem { name: "Reviews", path: REVIEWS },
    NavItem { name: "Contact", path: CONTACT },
];

impl NavItem {
    /// Only an exact match lights up a nav entry; `/services/web-development`
    /// does not mark "Services" active.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }
}

pub fn service_path(slug: &str) -> String {
    format!("{SERVICES}/{slug}")
}

pub fn project_path(id: u32) -> String {
    format!("{PROJECTS}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_route_is_exact() {
        let services = NAV_ITEMS[3];
        assert!(services.is_active("/services"));
        assert!(!services.is_active("/services/web-development"));
        assert!(!services.is_active("/"));

        let active = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active("/reviews"))
            .map(|item| item.name)
            .collect::<Vec<_>>();
        assert_eq!(active, vec!["Reviews"]);
    }

    #[test]
    fn test_detail_paths() {
        assert_eq!(service_path("ui-ux-design"), "/services/ui-ux-design");
        assert_eq!(project_path(3), "/projects/3");
    }
}
