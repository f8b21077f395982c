use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use locker_types::{decide, GuardDecision, Requirement};

use crate::session::use_session;

/// Renders `children` only when the session meets `requirement`; otherwise
/// navigates to the redirect target. Advisory only: the backend authorizes
/// every call on its own.
#[component]
pub fn Guarded(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let GuardDecision::Redirect(target) = decide(requirement, session.access()) {
            navigate(target, Default::default());
        }
    });

    move || match decide(requirement, session.access()) {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Pending | GuardDecision::Redirect(_) => {
            view! {
                <div class="loading">
                    <div class="spinner"></div>
                    "Checking session..."
                </div>
            }
                .into_any()
        }
    }
}
