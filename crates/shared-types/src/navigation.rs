use crate::models::Role;
use serde::{Deserialize, Serialize};

/// Destinations the shell can send the viewer to.
///
/// Route matching belongs to the router; these are opaque tokens with a
/// fixed path each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteId {
    Home,
    AdminDashboard,
    VerifierDashboard,
    UserDashboard,
    Apply,
    About,
    Contact,
    LoanApplication,
    Login,
}

/// Every route identifier, in declaration order.
pub const ALL_ROUTES: &[RouteId] = &[
    RouteId::Home,
    RouteId::AdminDashboard,
    RouteId::VerifierDashboard,
    RouteId::UserDashboard,
    RouteId::Apply,
    RouteId::About,
    RouteId::Contact,
    RouteId::LoanApplication,
    RouteId::Login,
];

impl RouteId {
    pub fn path(&self) -> &'static str {
        match self {
            RouteId::Home => "/",
            RouteId::AdminDashboard => "/admin-dashboard",
            RouteId::VerifierDashboard => "/verifier-dashboard",
            RouteId::UserDashboard => "/userDashboard",
            RouteId::Apply => "/apply",
            RouteId::About => "/about",
            RouteId::Contact => "/contact",
            RouteId::LoanApplication => "/loan-application",
            RouteId::Login => "/login",
        }
    }
}

/// Icon shown next to a navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconKind {
    Home,
    Dashboard,
    Money,
    Info,
    Contact,
    /// Drawer trigger in the top bar.
    Menu,
}

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub label: &'static str,
    pub destination: RouteId,
    pub icon: IconKind,
}

/// Resolve where "Dashboard" leads for the given role.
///
/// Only admin and verifier have dedicated dashboards; every other value,
/// including an anonymous viewer, lands on the user dashboard.
pub fn dashboard_route(role: Option<&Role>) -> RouteId {
    match role {
        Some(Role::Admin) => RouteId::AdminDashboard,
        Some(Role::Verifier) => RouteId::VerifierDashboard,
        _ => RouteId::UserDashboard,
    }
}

/// The ordered navigation menu. Only the Dashboard entry depends on `role`.
pub fn nav_items(role: Option<&Role>) -> Vec<NavigationItem> {
    vec![
        NavigationItem {
            label: "Home",
            destination: RouteId::Home,
            icon: IconKind::Home,
        },
        NavigationItem {
            label: "Dashboard",
            destination: dashboard_route(role),
            icon: IconKind::Dashboard,
        },
        NavigationItem {
            label: "Apply",
            destination: RouteId::Apply,
            icon: IconKind::Money,
        },
        NavigationItem {
            label: "About",
            destination: RouteId::About,
            icon: IconKind::Info,
        },
        NavigationItem {
            label: "Contact",
            destination: RouteId::Contact,
            icon: IconKind::Contact,
        },
    ]
}

/// A landing-page card with a single call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub blurb: &'static str,
    pub button_label: &'static str,
    pub destination: RouteId,
    pub icon: IconKind,
}

/// The three landing cards. The dashboard card shares [`dashboard_route`]
/// with the menu so both always agree.
pub fn landing_actions(role: Option<&Role>) -> Vec<CallToAction> {
    vec![
        CallToAction {
            title: "Apply for a Loan",
            blurb: "Get started with your loan application today. Quick and easy process.",
            button_label: "Start Application",
            destination: RouteId::LoanApplication,
            icon: IconKind::Money,
        },
        CallToAction {
            title: "Check Your Dashboard",
            blurb: "View your loan status and account information in one place.",
            button_label: "Go to Dashboard",
            destination: dashboard_route(role),
            icon: IconKind::Dashboard,
        },
        CallToAction {
            title: "Learn More",
            blurb: "Find out more about our services and how we can help you.",
            button_label: "About Us",
            destination: RouteId::About,
            icon: IconKind::Info,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_roles() -> Vec<Option<Role>> {
        vec![
            Some(Role::Admin),
            Some(Role::Verifier),
            Some(Role::User),
            None,
            Some(Role::from_claim("loan-officer")),
            Some(Role::from_claim("")),
        ]
    }

    #[test]
    fn admin_resolves_to_admin_dashboard() {
        assert_eq!(dashboard_route(Some(&Role::Admin)), RouteId::AdminDashboard);
        assert_eq!(dashboard_route(Some(&Role::Admin)).path(), "/admin-dashboard");
    }

    #[test]
    fn verifier_resolves_to_verifier_dashboard() {
        assert_eq!(
            dashboard_route(Some(&Role::Verifier)),
            RouteId::VerifierDashboard
        );
    }

    #[test]
    fn user_anonymous_and_unknown_fall_back_to_user_dashboard() {
        assert_eq!(dashboard_route(Some(&Role::User)), RouteId::UserDashboard);
        assert_eq!(dashboard_route(None), RouteId::UserDashboard);
        assert_eq!(
            dashboard_route(Some(&Role::from_claim("superadmin"))),
            RouteId::UserDashboard
        );
        assert_eq!(dashboard_route(None).path(), "/userDashboard");
    }

    #[test]
    fn resolver_only_yields_dashboard_routes() {
        let dashboards = [
            RouteId::AdminDashboard,
            RouteId::VerifierDashboard,
            RouteId::UserDashboard,
        ];
        for role in sample_roles() {
            assert!(dashboards.contains(&dashboard_route(role.as_ref())));
        }
    }

    #[test]
    fn menu_and_landing_card_agree_on_dashboard() {
        for role in sample_roles() {
            let menu = nav_items(role.as_ref());
            let cards = landing_actions(role.as_ref());
            let menu_dest = menu.iter().find(|i| i.label == "Dashboard").unwrap().destination;
            let card_dest = cards
                .iter()
                .find(|c| c.button_label == "Go to Dashboard")
                .unwrap()
                .destination;
            assert_eq!(menu_dest, card_dest);
            assert_eq!(menu_dest, dashboard_route(role.as_ref()));
        }
    }

    #[test]
    fn nav_items_are_ordered_and_role_invariant_except_dashboard() {
        let labels: Vec<_> = nav_items(None).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Home", "Dashboard", "Apply", "About", "Contact"]);

        let anon = nav_items(None);
        let admin = nav_items(Some(&Role::Admin));
        for (a, b) in anon.iter().zip(admin.iter()) {
            if a.label != "Dashboard" {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn admin_clicking_dashboard_goes_to_admin_dashboard() {
        let items = nav_items(Some(&Role::Admin));
        assert_eq!(items[1].destination.path(), "/admin-dashboard");
    }

    #[test]
    fn anonymous_clicking_dashboard_goes_to_user_dashboard() {
        let items = nav_items(None);
        assert_eq!(items[1].destination.path(), "/userDashboard");
    }

    #[test]
    fn route_paths_are_unique() {
        let paths: std::collections::HashSet<_> = ALL_ROUTES.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), ALL_ROUTES.len());
    }

    #[test]
    fn landing_actions_point_at_fixed_routes() {
        let cards = landing_actions(Some(&Role::Verifier));
        let dests: Vec<_> = cards.iter().map(|c| c.destination.path()).collect();
        assert_eq!(
            dests,
            vec!["/loan-application", "/verifier-dashboard", "/about"]
        );
    }
}
