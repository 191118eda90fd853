use leptos::*;
use leptos_router::{use_location, Location, Redirect};

use crate::auth::use_auth;
use crate::components::loading_spinner::LoadingSpinner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Allow,
    Redirect(String),
}

pub fn guard_decision(loading: bool, signed_in: bool, path: &str) -> GuardDecision {
    if loading {
        GuardDecision::Wait
    } else if signed_in {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(login_redirect(path))
    }
}

/// `/login?from=<path>`, so the login page can send the visitor back.
pub fn login_redirect(path: &str) -> String {
    match path {
        "" | "/" => "/login".to_string(),
        path => format!("/login?from={}", urlencoding::encode(path)),
    }
}

/// Path plus query string, whether or not `search` kept its leading `?`.
pub fn join_path(pathname: &str, search: &str) -> String {
    match search.trim_start_matches('?') {
        "" => pathname.to_string(),
        query => format!("{}?{}", pathname, query),
    }
}

/// Current location, read without subscribing; for event handlers.
pub fn current_path(location: &Location) -> String {
    join_path(
        &location.pathname.get_untracked(),
        &location.search.get_untracked(),
    )
}

/// Where to go after signing in. Only same-site absolute paths are honored.
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

/// Renders `children` only for a signed-in visitor.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    let decision = create_memo(move |_| {
        let path = join_path(&location.pathname.get(), &location.search.get());
        guard_decision(auth.loading().get(), auth.is_signed_in(), &path)
    });

    move || match decision.get() {
        GuardDecision::Wait => view! { <LoadingSpinner/> }.into_view(),
        GuardDecision::Allow => children().into_view(),
        GuardDecision::Redirect(to) => view! { <Redirect path=to/> }.into_view(),
    }
}
