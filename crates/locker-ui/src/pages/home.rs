use leptos::prelude::*;

use crate::components::card::Card;
use crate::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let signedIn = move || session.access().is_signed_in();

    view! {
        <section class="hero">
            <h1>"Welcome to DigiLocker"</h1>
            <p class="subtitle">
                "A secure platform for storing, managing, and verifying your important documents."
            </p>
            <div class="hero-actions">
                <a class="btn btn-primary" class:hidden=signedIn href="/register">
                    "Sign Up"
                </a>
                <a class="btn btn-ghost" class:hidden=signedIn href="/login">
                    "Login"
                </a>
                <a class="btn btn-primary" class:hidden=move || !signedIn() href="/documents">
                    "My Documents"
                </a>
            </div>
        </section>

        <div class="feature-grid">
            <Card title="Secure Storage">
                <p>"Store your important documents securely with access control."</p>
            </Card>
            <Card title="Easy Management">
                <p>"Organize, categorize, and search your documents with ease."</p>
            </Card>
            <Card title="Document Verification">
                <p>"Get your documents verified by authorized personnel for added authenticity."</p>
            </Card>
        </div>

        <section class="how-it-works">
            <h2>"How It Works"</h2>
            <p>
                "Upload your documents, organize them, and access them anytime. "
                "Moderators review uploads and mark them as verified."
            </p>
        </section>
    }
}
