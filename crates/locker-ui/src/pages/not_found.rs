use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="subtitle">
                "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."
            </p>
            <a class="btn btn-primary" href="/">
                "Go to Homepage"
            </a>
        </div>
    }
}
