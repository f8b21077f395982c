use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"DigiLocker \u{00A9} Secure Document Storage and Management"</p>
        </footer>
    }
}
