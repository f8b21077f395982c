use leptos::prelude::*;
use locker_types::{Access, Session};

/// Reactive view of the persisted session, shared via context.
///
/// Starts unresolved so server and client render the same first frame; the
/// stored record is read once the app has hydrated.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    resolved: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            resolved: RwSignal::new(false),
        }
    }

    /// Already-known state, bypassing storage.
    pub fn resolved(session: Option<Session>) -> Self {
        Self {
            session: RwSignal::new(session),
            resolved: RwSignal::new(true),
        }
    }

    pub fn access(&self) -> Access {
        if !self.resolved.get() {
            return Access::Unresolved;
        }
        self.session.with(|s| Access::from_session(s.as_ref()))
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.username.clone()))
    }

    pub fn set(&self, session: Option<Session>) {
        self.session.set(session);
        self.resolved.set(true);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let ctx = SessionContext::new();
        provide_context(ctx);
        ctx
    })
}

/// Provides [`SessionContext`] and loads the stored session after hydration.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = SessionContext::new();
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Ok(api) = browser::api() {
            ctx.set(api.session().current());
        } else {
            ctx.set(None);
        }
    });

    children()
}

#[cfg(feature = "hydrate")]
pub mod browser {
    use locker_client::{ApiClient, BrowserStorage, ClientError, SessionStore};

    /// Client for the page's own origin, which forwards `/api/*`.
    pub fn api() -> Result<ApiClient, ClientError> {
        let origin = leptos::prelude::window()
            .location()
            .origin()
            .unwrap_or_default();
        ApiClient::new(&origin, SessionStore::new(BrowserStorage))
    }

    /// Browser confirmation dialog; `false` when unavailable.
    pub fn confirm(message: &str) -> bool {
        leptos::prelude::window()
            .confirm_with_message(message)
            .unwrap_or(false)
    }
}
