use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use locker_types::LoginRequest;

use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    #[allow(unused_variables)]
    let session = use_session();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (errorMessage, setErrorMessage) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (pending, setPending) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = credentials.validate() {
            setErrorMessage.set(Some(e.to_string()));
            return;
        }
        setErrorMessage.set(None);

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let navigate = navigate.clone();
            setPending.set(true);
            spawn_local(async move {
                let result =
                    async { crate::session::browser::api()?.auth().login(&credentials).await }
                        .await;
                setPending.set(false);
                match result {
                    Ok(signedIn) => {
                        session.set(Some(signedIn));
                        navigate(locker_types::DOCUMENTS_PATH, Default::default());
                    }
                    Err(e) => setErrorMessage.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"D"</div>
                    <h1>"Login"</h1>
                    <p>"Sign in to access your documents"</p>
                </div>

                {move || {
                    errorMessage
                        .get()
                        .map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter username"
                            prop:value=username
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter password"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="login-footer">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
