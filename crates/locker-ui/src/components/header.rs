use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use locker_types::{Access, Privilege};

use crate::components::toast::use_toasts;
use crate::session::use_session;

/// Links shown for a given access state, in display order.
pub fn nav_links(access: Access) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/", "Home")];
    if access.is_signed_in() {
        links.push(("/documents", "My Documents"));
        if access.has(Privilege::Admin) {
            links.push(("/admin", "Admin Dashboard"));
        }
        if access.has(Privilege::Moderator) {
            links.push(("/moderator", "Moderator Dashboard"));
        }
    }
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    #[allow(unused_variables)]
    let toasts = use_toasts();

    let signedIn = move || session.access().is_signed_in();

    let logOut = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let cleared = crate::session::browser::api().and_then(|api| api.auth().logout());
            if let (Err(e), Some(toasts)) = (cleared, toasts) {
                toasts.error(e.to_string());
            }
        }
        session.set(None);
        navigate("/login", Default::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" href="/">
                <div class="brand-icon">"D"</div>
                <span class="brand-text">"DigiLocker"</span>
            </a>
            <ul class="nav-links">
                {move || {
                    nav_links(session.access())
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a href=href>{label}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="nav-account">
                <span class="nav-welcome" class:hidden=move || !signedIn()>
                    "Welcome, "
                    {move || session.username().unwrap_or_default()}
                </span>
                <button
                    class="btn btn-ghost btn-sm"
                    class:hidden=move || !signedIn()
                    on:click=logOut
                >
                    "Logout"
                </button>
                <a class="nav-item" class:hidden=signedIn href="/login">
                    "Login"
                </a>
                <a class="nav-item" class:hidden=signedIn href="/register">
                    "Register"
                </a>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locker_types::Privileges;

    #[test]
    fn anonymous_sees_home_only() {
        assert_eq!(nav_links(Access::Anonymous), vec![("/", "Home")]);
        assert_eq!(nav_links(Access::Unresolved), vec![("/", "Home")]);
    }

    #[test]
    fn dashboards_follow_roles() {
        let regular: Vec<_> = nav_links(Access::Regular).into_iter().map(|l| l.0).collect();
        assert_eq!(regular, vec!["/", "/documents"]);

        let moderator = Access::Privileged(Privileges {
            moderator: true,
            admin: false,
        });
        let paths: Vec<_> = nav_links(moderator).into_iter().map(|l| l.0).collect();
        assert_eq!(paths, vec!["/", "/documents", "/moderator"]);

        let both = Access::Privileged(Privileges {
            moderator: true,
            admin: true,
        });
        let paths: Vec<_> = nav_links(both).into_iter().map(|l| l.0).collect();
        assert_eq!(paths, vec!["/", "/documents", "/admin", "/moderator"]);
    }
}
