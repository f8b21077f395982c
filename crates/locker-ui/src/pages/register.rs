use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use locker_types::RegistrationForm;

const REGISTERED_MESSAGE: &str = "Registration successful! You can now login.";
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

#[derive(Clone, Debug, PartialEq)]
enum Outcome {
    Registered,
    Failed(String),
}

/// Labelled input bound to one field of the registration form.
fn form_field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    form: RwSignal<RegistrationForm>,
    get: fn(&RegistrationForm) -> String,
    set: fn(&mut RegistrationForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[allow(unused_variables)]
    let navigate = use_navigate();
    let form = RwSignal::new(RegistrationForm::default());
    let (outcome, setOutcome) = signal(Option::<Outcome>::None);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        #[allow(unused_variables)]
        let request = match form.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                setOutcome.set(Some(Outcome::Failed(e.to_string())));
                return;
            }
        };
        setOutcome.set(None);

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let navigate = navigate.clone();
            spawn_local(async move {
                let result =
                    async { crate::session::browser::api()?.auth().register(&request).await }
                        .await;
                match result {
                    Ok(_) => {
                        setOutcome.set(Some(Outcome::Registered));
                        form.set(RegistrationForm::default());
                        set_timeout(
                            move || navigate(locker_types::LOGIN_PATH, Default::default()),
                            REDIRECT_DELAY,
                        );
                    }
                    Err(e) => setOutcome.set(Some(Outcome::Failed(e.to_string()))),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card register-card">
                <div class="login-header">
                    <div class="login-icon">"D"</div>
                    <h1>"Register"</h1>
                    <p>"Create your DigiLocker account"</p>
                </div>

                {move || match outcome.get() {
                    Some(Outcome::Registered) => {
                        view! { <div class="login-success">{REGISTERED_MESSAGE}</div> }.into_any()
                    }
                    Some(Outcome::Failed(message)) => {
                        view! { <div class="login-error">{message}</div> }.into_any()
                    }
                    None => ().into_any(),
                }}

                <form on:submit=onSubmit>
                    {form_field(
                        "username",
                        "Username",
                        "text",
                        form,
                        |f| f.username.clone(),
                        |f, v| f.username = v,
                    )}
                    {form_field("email", "Email", "email", form, |f| f.email.clone(), |f, v| f.email = v)}
                    {form_field(
                        "password",
                        "Password",
                        "password",
                        form,
                        |f| f.password.clone(),
                        |f, v| f.password = v,
                    )}
                    {form_field(
                        "confirm-password",
                        "Confirm Password",
                        "password",
                        form,
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}
                    {form_field(
                        "full-name",
                        "Full Name",
                        "text",
                        form,
                        |f| f.full_name.clone(),
                        |f, v| f.full_name = v,
                    )}
                    {form_field(
                        "mobile-number",
                        "Mobile Number",
                        "tel",
                        form,
                        |f| f.mobile_number.clone(),
                        |f, v| f.mobile_number = v,
                    )}
                    {form_field(
                        "aadhaar-number",
                        "Aadhaar Number (optional)",
                        "text",
                        form,
                        |f| f.aadhaar_number.clone(),
                        |f, v| f.aadhaar_number = v,
                    )}
                    <button type="submit" class="btn btn-primary">
                        "Register"
                    </button>
                </form>
                <p class="login-footer">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
