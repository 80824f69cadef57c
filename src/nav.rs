// Static navigation model for the sidebar menu.
// Defines the Dashboards section, its submenu entries, the Apps link, and
// the projection of shell state onto the list of visible, activatable rows.

/// Routes that belong to the Dashboards section. Membership drives submenu
/// auto-open and active-link highlighting.
pub const DASHBOARD_ROUTES: [&str; 4] = [
    "/dashboard/analytics",
    "/dashboard/crm",
    "/dashboard/ecommerce",
    "/dashboard/crypto",
];

/// A submenu entry under the Dashboards group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubItem {
    pub label: &'static str,
    pub target: &'static str,
}

/// The Dashboards submenu, in display order.
pub const DASHBOARD_ITEMS: [SubItem; 4] = [
    SubItem {
        label: "Analytics",
        target: "/dashboard/analytics",
    },
    SubItem {
        label: "CRM",
        target: "/dashboard/crm",
    },
    SubItem {
        label: "Ecommerce",
        target: "/dashboard/ecommerce",
    },
    SubItem {
        label: "Crypto",
        target: "/dashboard/crypto",
    },
];

/// Target of the flat Apps link item.
pub const APPS_ROUTE: &str = "/apps";

/// Whether the given path is inside the Dashboards section.
/// Exact membership; unknown paths degrade to "not active".
pub fn section_active(path: &str) -> bool {
    DASHBOARD_ROUTES.contains(&path)
}

/// Whether a submenu entry is the active link for the given path.
/// Exact string equality, no prefix matching.
pub fn link_active(item: &SubItem, path: &str) -> bool {
    item.target == path
}

/// An activatable row in the sidebar, in the order rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    /// The Dashboards group header. Activation toggles the submenu.
    DashboardsToggle,
    /// A submenu entry, indexed into [`DASHBOARD_ITEMS`]. Activation navigates.
    Submenu(usize),
    /// The flat Apps link. Activation navigates.
    Apps,
}

/// The rows currently visible given the shell's derived expansion and the
/// submenu flag. Collapsed mode keeps the icon rows activatable but hides
/// the submenu entirely.
pub fn visible_rows(expanded: bool, submenu_open: bool) -> Vec<NavRow> {
    let mut rows = vec![NavRow::DashboardsToggle];
    if expanded && submenu_open {
        for i in 0..DASHBOARD_ITEMS.len() {
            rows.push(NavRow::Submenu(i));
        }
    }
    rows.push(NavRow::Apps);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_active_membership() {
        for route in DASHBOARD_ROUTES {
            assert!(section_active(route), "{route} should be active");
        }
        assert!(!section_active("/dashboard"));
        assert!(!section_active("/dashboard/settings/account"));
        assert!(!section_active("/apps"));
        assert!(!section_active("/dashboard/crm/extra"));
        assert!(!section_active(""));
    }

    #[test]
    fn test_exactly_one_active_link_per_section_route() {
        for route in DASHBOARD_ROUTES {
            let active: Vec<_> = DASHBOARD_ITEMS
                .iter()
                .filter(|item| link_active(item, route))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].target, route);
        }
    }

    #[test]
    fn test_no_active_link_outside_section() {
        for path in ["/dashboard", "/apps", "/unknown"] {
            assert!(!DASHBOARD_ITEMS.iter().any(|item| link_active(item, path)));
        }
    }

    #[test]
    fn test_no_prefix_matching() {
        let crm = &DASHBOARD_ITEMS[1];
        assert!(link_active(crm, "/dashboard/crm"));
        assert!(!link_active(crm, "/dashboard/crm/"));
        assert!(!link_active(crm, "/dashboard/crm/reports"));
    }

    #[test]
    fn test_visible_rows_gating() {
        // Expanded with submenu open: toggle, four entries, apps.
        let rows = visible_rows(true, true);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], NavRow::DashboardsToggle);
        assert_eq!(rows[1], NavRow::Submenu(0));
        assert_eq!(rows[5], NavRow::Apps);

        // Expanded with submenu closed: no entries.
        assert_eq!(visible_rows(true, false), vec![NavRow::DashboardsToggle, NavRow::Apps]);

        // Collapsed hides the submenu even when the flag is open.
        assert_eq!(visible_rows(false, true), vec![NavRow::DashboardsToggle, NavRow::Apps]);
    }
}
