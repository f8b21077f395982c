use leptos::prelude::*;

/// Titled panel used by the dashboards.
#[component]
pub fn Card(
    /// Heading shown above the content
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card-title">{title}</div>
            {children()}
        </section>
    }
}
