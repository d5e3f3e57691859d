pub mod home;
pub mod not_found;
pub mod pages;

use crate::api::AuthClient;
use crate::auth::{use_auth, use_role};
use crate::logout::{LogoutCoordinator, LogoutOutcome, MountToken};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaCircleInfo, FaDollarSign, FaEnvelope, FaGauge, FaHouse,
};
use dioxus_free_icons::Icon;
use shared_types::{nav_items, IconKind, RouteId, ShellConfig};
use shared_ui::{
    use_layout, use_toast, Button, ButtonVariant, Drawer, DrawerClose, DrawerMenu,
    DrawerMenuItem, DrawerTrigger, LayoutProvider, ToastOptions, TopBar, TopBarItem, TopBarNav,
    TopBarTitle,
};

use home::Home;
use not_found::NotFound;
use pages::{
    About, AdminDashboard, Apply, Contact, LoanApplication, Login, UserDashboard,
    VerifierDashboard,
};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/admin-dashboard")]
    AdminDashboard {},
    #[route("/verifier-dashboard")]
    VerifierDashboard {},
    #[route("/userDashboard")]
    UserDashboard {},
    #[route("/apply")]
    Apply {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/loan-application")]
    LoanApplication {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<RouteId> for Route {
    fn from(id: RouteId) -> Self {
        match id {
            RouteId::Home => Route::Home {},
            RouteId::AdminDashboard => Route::AdminDashboard {},
            RouteId::VerifierDashboard => Route::VerifierDashboard {},
            RouteId::UserDashboard => Route::UserDashboard {},
            RouteId::Apply => Route::Apply {},
            RouteId::About => Route::About {},
            RouteId::Contact => Route::Contact {},
            RouteId::LoanApplication => Route::LoanApplication {},
            RouteId::Login => Route::Login {},
        }
    }
}

/// Icon for a navigation entry or call-to-action.
pub fn nav_icon(kind: IconKind) -> Element {
    match kind {
        IconKind::Home => rsx! { Icon::<FaHouse> { icon: FaHouse, width: 18, height: 18 } },
        IconKind::Dashboard => rsx! { Icon::<FaGauge> { icon: FaGauge, width: 18, height: 18 } },
        IconKind::Money => {
            rsx! { Icon::<FaDollarSign> { icon: FaDollarSign, width: 18, height: 18 } }
        }
        IconKind::Info => {
            rsx! { Icon::<FaCircleInfo> { icon: FaCircleInfo, width: 18, height: 18 } }
        }
        IconKind::Contact => {
            rsx! { Icon::<FaEnvelope> { icon: FaEnvelope, width: 18, height: 18 } }
        }
        IconKind::Menu => rsx! { Icon::<FaBars> { icon: FaBars, width: 20, height: 20 } },
    }
}

/// Shell layout: owns the responsive layout state for everything inside it.
#[component]
fn Shell() -> Element {
    let config: ShellConfig = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }
        LayoutProvider { narrow_query: config.narrow_media_query(),
            ShellChrome {}
        }
    }
}

/// Top bar, drawer and page outlet. Renders the role-resolved menu inline
/// when wide and inside the drawer when narrow.
#[component]
fn ShellChrome() -> Element {
    let route: Route = use_route();
    let config: ShellConfig = use_context();
    let role = use_role();
    let layout = use_layout().get();
    let mut auth = use_auth();
    let toast = use_toast();

    let items = nav_items(role.as_ref());

    let coordinator = use_hook(LogoutCoordinator::new);
    let mount = use_hook(MountToken::new);
    use_drop({
        let mount = mount.clone();
        move || mount.revoke()
    });
    let mut logging_out = use_signal(|| false);

    let client_config = config.clone();
    let handle_logout = move |_| {
        if coordinator.is_in_flight() {
            return;
        }
        let coordinator = coordinator.clone();
        let mount = mount.clone();
        let client = AuthClient::new(&client_config);
        logging_out.set(true);
        spawn(async move {
            let outcome = coordinator
                .perform(&client, &mount, move || {
                    auth.clear_auth();
                    navigator().push(Route::from(RouteId::Login));
                })
                .await;
            if !mount.is_mounted() {
                return;
            }
            logging_out.set(false);
            if let LogoutOutcome::Failed(failure) = outcome {
                toast.error(failure.user_message().to_string(), ToastOptions::new());
            }
        });
    };

    rsx! {
        TopBar {
            DrawerTrigger { {nav_icon(IconKind::Menu)} }
            TopBarTitle { "{config.brand_name}" }
            if layout.shows_inline_nav() {
                TopBarNav {
                    for item in items.iter() {
                        TopBarItem {
                            key: "{item.label}",
                            active: Route::from(item.destination) == route,
                            Link { to: Route::from(item.destination),
                                {nav_icon(item.icon)}
                                "{item.label}"
                            }
                        }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Text,
                disabled: logging_out(),
                onclick: handle_logout,
                "Logout"
            }
        }

        Drawer { width_px: config.drawer_width_px,
            DrawerClose {}
            DrawerMenu {
                for item in items.iter() {
                    DrawerMenuItem {
                        key: "{item.label}",
                        active: Route::from(item.destination) == route,
                        Link { to: Route::from(item.destination),
                            span { class: "drawer-menu-icon", {nav_icon(item.icon)} }
                            span { "{item.label}" }
                        }
                    }
                }
            }
        }

        main { class: "shell-content",
            Outlet::<Route> {}
        }
    }
}
