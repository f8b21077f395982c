use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use locker_types::{Privilege, Requirement};

use crate::components::footer::Footer;
use crate::components::guard::Guarded;
use crate::components::header::Header;
use crate::components::toast::ToastProvider;
use crate::pages::admin::AdminPage;
use crate::pages::document_detail::DocumentDetailPage;
use crate::pages::document_form::DocumentFormPage;
use crate::pages::documents::DocumentsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::moderator::ModeratorPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::session::SessionProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/locker-console.css" />
        <Title text="DigiLocker" />
        <ToastProvider>
            <SessionProvider>
                <Router>
                    <div class="app-layout">
                        <Header />
                        <main class="main-content">
                            <Routes fallback=|| view! { <NotFoundPage /> }.into_any()>
                                <Route path=StaticSegment("") view=HomePage />
                                <Route path=StaticSegment("login") view=LoginView />
                                <Route path=StaticSegment("register") view=RegisterView />
                                <Route path=StaticSegment("documents") view=DocumentsView />
                                <Route
                                    path=(StaticSegment("documents"), StaticSegment("new"))
                                    view=DocumentFormView
                                />
                                <Route
                                    path=(
                                        StaticSegment("documents"),
                                        StaticSegment("edit"),
                                        ParamSegment("id"),
                                    )
                                    view=DocumentFormView
                                />
                                <Route
                                    path=(StaticSegment("documents"), ParamSegment("id"))
                                    view=DocumentDetailView
                                />
                                <Route path=StaticSegment("admin") view=AdminView />
                                <Route path=StaticSegment("moderator") view=ModeratorView />
                            </Routes>
                        </main>
                        <Footer />
                    </div>
                </Router>
            </SessionProvider>
        </ToastProvider>
    }
}

#[component]
fn LoginView() -> impl IntoView {
    view! {
        <Guarded requirement=Requirement::GuestOnly>
            <LoginPage />
        </Guarded>
    }
}

#[component]
fn RegisterView() -> impl IntoView {
    view! {
        <Guarded requirement=Requirement::GuestOnly>
            <RegisterPage />
        </Guarded>
    }
}

#[component]
fn DocumentsView() -> impl IntoView {
    view! {
        <Guarded requirement=Requirement::SignedIn>
            <DocumentsPage />
        </Guarded>
    }
}

#[component]
fn DocumentFormView() -> impl IntoView {
    view! {
        <Guarded requirement=Requirement::SignedIn>
            <DocumentFormPage />
        </Guarded>
    }
}

#[component]
fn DocumentDetailView() -> impl IntoView {
    view! {
        <Guarded requirement=Requirement::SignedIn>
            <DocumentDetailPage />
        </Guarded>
    }
}

#[component]
fn AdminView() -> impl IntoView {
    view! {
        <Guarded requirement=Requirement::Privilege(Privilege::Admin)>
            <AdminPage />
        </Guarded>
    }
}

#[component]
fn ModeratorView() -> impl IntoView {
    view! {
        <Guarded requirement=Requirement::Privilege(Privilege::Moderator)>
            <ModeratorPage />
        </Guarded>
    }
}
