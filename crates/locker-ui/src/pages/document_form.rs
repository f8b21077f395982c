use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use locker_types::{DocumentDraft, DraftField};

/// Add mode when there is no id in the route, edit mode otherwise.
#[component]
pub fn DocumentFormPage() -> impl IntoView {
    let params = use_params_map();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let documentId = move || params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));
    let isAddMode = move || documentId().is_none();

    let draft = RwSignal::new(DocumentDraft::default());
    let (submitted, setSubmitted) = signal(false);
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(false);
    #[allow(unused_variables)]
    let (errorMessage, setErrorMessage) = signal(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use wasm_bindgen_futures::spawn_local;

        let Some(id) = documentId() else {
            return;
        };
        setLoading.set(true);
        spawn_local(async move {
            match async { crate::session::browser::api()?.documents().get(id).await }.await {
                Ok(document) => draft.set(DocumentDraft::from(&document)),
                Err(e) => setErrorMessage.set(Some(e.to_string())),
            }
            setLoading.set(false);
        });
    });

    let missing = move |field: DraftField| {
        submitted.get() && draft.with(|d| d.missing_fields().contains(&field))
    };

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        setSubmitted.set(true);
        if !draft.with_untracked(|d| d.missing_fields().is_empty()) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let payload = draft.get_untracked();
            let existing = documentId();
            let navigate = navigate.clone();
            setLoading.set(true);
            spawn_local(async move {
                let result = async {
                    let service = crate::session::browser::api()?.documents();
                    match existing {
                        Some(id) => service.update(id, &payload).await.map(|_| id),
                        None => service.create(&payload).await.map(|created| created.id),
                    }
                }
                .await;
                match result {
                    Ok(id) => navigate(&format!("/documents/{id}"), Default::default()),
                    Err(e) => {
                        setErrorMessage.set(Some(e.to_string()));
                        setLoading.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>{move || if isAddMode() { "Add Document" } else { "Edit Document" }}</h1>
        </div>

        {move || errorMessage.get().map(|message| view! { <div class="login-error">{message}</div> })}

        <form class="card document-form" on:submit=onSubmit>
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Enter document name"
                    class:invalid=move || missing(DraftField::Name)
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <div class="field-error" class:hidden=move || !missing(DraftField::Name)>
                    {DraftField::Name.message()}
                </div>
            </div>
            <div class="form-group">
                <label for="type">"Type"</label>
                <input
                    type="text"
                    id="type"
                    placeholder="Enter document type (e.g., ID Card, Certificate)"
                    class:invalid=move || missing(DraftField::Kind)
                    prop:value=move || draft.with(|d| d.kind.clone())
                    on:input=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
                />
                <div class="field-error" class:hidden=move || !missing(DraftField::Kind)>
                    {DraftField::Kind.message()}
                </div>
            </div>
            <div class="form-group">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    placeholder="Enter document description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label for="content">"Content"</label>
                <textarea
                    id="content"
                    rows="5"
                    placeholder="Enter document content"
                    prop:value=move || draft.with(|d| d.content.clone())
                    on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Saving..." } else { "Save" }}
                </button>
                <a class="btn btn-ghost" href="/documents">
                    "Cancel"
                </a>
            </div>
        </form>
    }
}
