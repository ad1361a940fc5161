//! Sidebar navigation tree
//!
//! The full menu of the dashboard: collapsible sections with leaf links plus
//! two direct links. Sections whose screens are not built yet still appear
//! (their paths resolve to the not-found page), matching the product menu.
//! `NavState` owns the open-section set and a cursor over the visible rows.

use crate::routes::Page;
use std::collections::BTreeSet;

/// A leaf link inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLeaf {
    pub title: &'static str,
    pub path: &'static str,
}

/// A top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Direct link without children.
    Link { title: &'static str, path: &'static str },
    /// Collapsible section with leaf links.
    Section {
        title: &'static str,
        leaves: &'static [NavLeaf],
    },
}

impl NavItem {
    pub fn title(&self) -> &'static str {
        match self {
            NavItem::Link { title, .. } | NavItem::Section { title, .. } => title,
        }
    }
}

const fn leaf(title: &'static str, path: &'static str) -> NavLeaf {
    NavLeaf { title, path }
}

/// The sidebar menu, in display order.
pub const MENU: &[NavItem] = &[
    NavItem::Link { title: "Dashboard", path: "/" },
    NavItem::Section {
        title: "Clients",
        leaves: &[
            leaf("All Clients", "/clients"),
            leaf("Follow up", "/clients/followup"),
        ],
    },
    NavItem::Section {
        title: "Calendar",
        leaves: &[
            leaf("Appointments", "/calendar/appointments"),
            leaf("Next Appointment", "/calendar/next"),
            leaf("Appointment Report", "/calendar/reports"),
            leaf("Available Appointment", "/calendar/available"),
        ],
    },
    NavItem::Section {
        title: "Leads",
        leaves: &[
            leaf("Leads", "/leads"),
            leaf("Leads Charts", "/leads/charts"),
            leaf("Lead Responses", "/leads/responses"),
            leaf("Lead Referrers", "/leads/referrers"),
        ],
    },
    NavItem::Section {
        title: "Client Check-ins",
        leaves: &[
            leaf("All Check-ins", "/checkins"),
            leaf("Quick View", "/checkins/quick"),
            leaf("Submitted Checklists", "/checkins/submitted"),
            leaf("Upcoming Check-ins", "/checkins/upcoming"),
            leaf("Unsubmitted Check-ins", "/checkins/unsubmitted"),
        ],
    },
    NavItem::Section {
        title: "Client App Requests",
        leaves: &[
            leaf("Workout", "/requests/workout"),
            leaf("Diet", "/requests/diet"),
        ],
    },
    NavItem::Section {
        title: "Client Reminders",
        leaves: &[
            leaf("All Reminders", "/reminders"),
            leaf("Reminder Types", "/reminders/types"),
        ],
    },
    NavItem::Section {
        title: "Settings",
        leaves: &[
            leaf("Theme Editor", "/settings"),
            leaf("Mobile Customization", "/mobile-customization"),
            leaf("Client Types", "/settings/client-types"),
            leaf("Client Groups", "/settings/client-groups"),
            leaf("Client General Files", "/settings/files"),
            leaf("Call Types", "/settings/call-types"),
        ],
    },
    NavItem::Section {
        title: "Finance",
        leaves: &[
            leaf("All Invoices", "/finance/invoices"),
            leaf("Due Invoices", "/finance/due"),
            leaf("Account Statement", "/finance/statements"),
            leaf("All Products", "/finance/products"),
            leaf("Subscriptions", "/finance/subscriptions"),
            leaf("Financial Reports", "/finance/reports"),
            leaf("Mobile Wallets", "/finance/wallets"),
        ],
    },
    NavItem::Section {
        title: "Forms",
        leaves: &[
            leaf("Check-in Forms", "/forms/checkins"),
            leaf("Check-in Q&A", "/forms/qa"),
            leaf("Questions", "/forms/questions"),
            leaf("Check-in Types", "/forms/types"),
            leaf("Labels", "/forms/labels"),
        ],
    },
    NavItem::Section {
        title: "Diet",
        leaves: &[
            leaf("All Diets", "/diet"),
            leaf("Client Medical Cases", "/diet/medical"),
            leaf("Diseases", "/diet/diseases"),
            leaf("All Food", "/diet/food"),
            leaf("Food Groups", "/diet/groups"),
        ],
    },
    NavItem::Section {
        title: "Workout",
        leaves: &[
            leaf("Resistance", "/workout/resistance"),
            leaf("Plans", "/workout/plans"),
            leaf("Techniques", "/workout/techniques"),
            leaf("Categories", "/workout/categories"),
        ],
    },
    NavItem::Section {
        title: "Fitness",
        leaves: &[
            leaf("Plans", "/fitness/plans"),
            leaf("Categories", "/fitness/categories"),
        ],
    },
    NavItem::Section {
        title: "Mobility",
        leaves: &[
            leaf("Plans", "/mobility/plans"),
            leaf("Categories", "/mobility/categories"),
        ],
    },
    NavItem::Section {
        title: "Administration",
        leaves: &[
            leaf("All Team Members", "/admin/team"),
            leaf("Active Team Members", "/admin/active"),
            leaf("Roles and Permissions", "/admin/roles"),
            leaf("Team Productivity", "/admin/productivity"),
        ],
    },
    NavItem::Section {
        title: "Reports",
        leaves: &[
            leaf("Clients", "/reports/clients"),
            leaf("Accounting", "/reports/accounting"),
            leaf("Subscriptions", "/reports/subscriptions"),
            leaf("Diets", "/reports/diets"),
            leaf("Workouts", "/reports/workouts"),
            leaf("System Analysis", "/reports/system"),
        ],
    },
];

/// One visible sidebar row after flattening collapsed sections away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    Link { title: &'static str, path: &'static str },
    SectionHeader { title: &'static str, open: bool, active: bool },
    Leaf { title: &'static str, path: &'static str, active: bool },
}

impl NavRow {
    /// Path the row navigates to, if it is a link.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            NavRow::Link { path, .. } | NavRow::Leaf { path, .. } => Some(path),
            NavRow::SectionHeader { .. } => None,
        }
    }
}

/// Open/closed sections plus a cursor over the visible rows.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    open: BTreeSet<&'static str>,
    pub cursor: usize,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, section: &str) -> bool {
        self.open.contains(section)
    }

    pub fn toggle(&mut self, section: &'static str) {
        if !self.open.remove(section) {
            self.open.insert(section);
        }
    }

    /// Open the section containing the current page so the active leaf is
    /// visible after an external navigation (deep link, notification).
    pub fn reveal(&mut self, current: &Page) {
        let path = current.path();
        for &item in MENU {
            if let NavItem::Section { title, leaves } = item {
                if leaves.iter().any(|l| l.path == path) {
                    self.open.insert(title);
                }
            }
        }
    }

    /// Flatten the menu into visible rows with active-state annotations.
    pub fn rows(&self, current: &Page) -> Vec<NavRow> {
        let current_path = current.path();
        let mut rows = Vec::new();
        for &item in MENU {
            match item {
                NavItem::Link { title, path } => rows.push(NavRow::Link { title, path }),
                NavItem::Section { title, leaves } => {
                    let open = self.is_open(title);
                    let active = leaves.iter().any(|l| l.path == current_path);
                    rows.push(NavRow::SectionHeader { title, open, active });
                    if open {
                        for l in leaves {
                            rows.push(NavRow::Leaf {
                                title: l.title,
                                path: l.path,
                                active: l.path == current_path,
                            });
                        }
                    }
                }
            }
        }
        rows
    }

    pub fn move_cursor(&mut self, delta: i32, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let current = self.cursor as i32;
        self.cursor = (current + delta).clamp(0, row_count as i32 - 1) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_menu_shows_only_top_level() {
        let state = NavState::new();
        let rows = state.rows(&Page::Dashboard);
        assert_eq!(rows.len(), MENU.len());
        assert!(matches!(rows[0], NavRow::Link { .. }));
    }

    #[test]
    fn test_open_section_exposes_leaves() {
        let mut state = NavState::new();
        state.toggle("Clients");
        let rows = state.rows(&Page::Dashboard);
        assert_eq!(rows.len(), MENU.len() + 2);
        assert!(rows
            .iter()
            .any(|r| matches!(r, NavRow::Leaf { path: "/clients", .. })));
    }

    #[test]
    fn test_active_parent_and_leaf() {
        let mut state = NavState::new();
        state.toggle("Client Check-ins");
        let rows = state.rows(&Page::CheckinsSubmitted);
        let header_active = rows.iter().any(|r| {
            matches!(r, NavRow::SectionHeader { title: "Client Check-ins", active: true, .. })
        });
        let leaf_active = rows.iter().any(|r| {
            matches!(r, NavRow::Leaf { path: "/checkins/submitted", active: true, .. })
        });
        assert!(header_active);
        assert!(leaf_active);
    }

    #[test]
    fn test_reveal_opens_owning_section() {
        let mut state = NavState::new();
        state.reveal(&Page::LeadsReferrers);
        assert!(state.is_open("Leads"));
        assert!(!state.is_open("Finance"));
    }

    #[test]
    fn test_toggle_is_involutive() {
        let mut state = NavState::new();
        state.toggle("Finance");
        assert!(state.is_open("Finance"));
        state.toggle("Finance");
        assert!(!state.is_open("Finance"));
    }

    #[test]
    fn test_cursor_clamps() {
        let mut state = NavState::new();
        state.move_cursor(-3, 10);
        assert_eq!(state.cursor, 0);
        state.move_cursor(100, 10);
        assert_eq!(state.cursor, 9);
    }
}
