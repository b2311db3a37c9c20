//! Static navigation configuration.
//!
//! Menu entries and quick actions live here as data so the sidebar and
//! home page render from one place.

use crate::app::Route;

/// A sidebar menu entry.
#[derive(Clone, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
}

/// Sidebar menu entries, in display order.
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Overview",
            route: Route::Home,
        },
        MenuItem {
            label: "Sessions",
            route: Route::Sessions,
        },
        MenuItem {
            label: "Round Timer",
            route: Route::Timer,
        },
    ]
}

/// A quick-action shortcut on the home page.
#[derive(Clone, PartialEq)]
pub struct QuickAction {
    pub label: &'static str,
    pub hint: &'static str,
    pub route: Route,
}

/// Home page quick actions.
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            label: "Browse Sessions",
            hint: "Review your training log",
            route: Route::Sessions,
        },
        QuickAction {
            label: "Start Round Timer",
            hint: "Keeps the screen awake while you roll",
            route: Route::Timer,
        },
    ]
}
