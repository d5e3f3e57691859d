//! Destination pages. Their content lives outside the shell; each renders a
//! titled placeholder so navigation resolves to a real page.

use dioxus::prelude::*;
use shared_types::RouteId;

use crate::routes::Route;

#[component]
fn PagePlaceholder(title: String, blurb: String) -> Element {
    rsx! {
        section { class: "page-placeholder",
            h1 { class: "page-placeholder-title", "{title}" }
            p { class: "page-placeholder-blurb", "{blurb}" }
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Admin Dashboard",
            blurb: "Manage loan applications, verifiers and platform settings.",
        }
    }
}

#[component]
pub fn VerifierDashboard() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Verifier Dashboard",
            blurb: "Review and verify submitted loan applications.",
        }
    }
}

#[component]
pub fn UserDashboard() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Dashboard",
            blurb: "View your loan status and account information in one place.",
        }
    }
}

#[component]
pub fn Apply() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Apply",
            blurb: "Choose a loan product to start your application.",
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        PagePlaceholder {
            title: "About Us",
            blurb: "Find out more about our services and how we can help you.",
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Contact",
            blurb: "Reach our support team with any question about your loan.",
        }
    }
}

#[component]
pub fn LoanApplication() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Loan Application",
            blurb: "Get started with your loan application today. Quick and easy process.",
        }
    }
}

/// Landing spot after logout. Sign-in itself is handled by the auth backend.
#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "login-page",
            PagePlaceholder {
                title: "Signed out",
                blurb: "Your session has ended. Sign in again to continue.",
            }
            Link { to: Route::from(RouteId::Home), class: "login-home-link", "Back to Home" }
        }
    }
}
