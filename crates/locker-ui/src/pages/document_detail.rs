use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use locker_types::{date_time_part, Document, Verification};

use crate::components::document_card::VerificationBadge;
use crate::components::toast::use_toasts;
use crate::session::use_session;

/// Owner name, with the account id when the backend sent one.
fn owner_label(document: &Document) -> Option<String> {
    let name = document.owner_name()?;
    Some(match document.owner_id() {
        Some(id) => format!("{name} (#{id})"),
        None => name.to_string(),
    })
}

fn timestamp(value: Option<&str>) -> String {
    value.map(date_time_part).unwrap_or_else(|| "-".into())
}

#[component]
pub fn DocumentMetadata(document: Document) -> impl IntoView {
    let content = document.content_text().to_string();

    view! {
        <div class="document-meta">
            <div class="meta-column">
                <p><strong>"Type: "</strong>{document.kind.clone()}</p>
                <p><strong>"Description: "</strong>{document.description_text().to_string()}</p>
                {owner_label(&document)
                    .map(|owner| view! { <p><strong>"Owner: "</strong>{owner}</p> })}
                <p><strong>"Created: "</strong>{timestamp(document.created_at.as_deref())}</p>
                <p><strong>"Last Updated: "</strong>{timestamp(document.updated_at.as_deref())}</p>
            </div>
            {(!content.is_empty())
                .then(|| {
                    view! {
                        <div class="meta-column">
                            <h3>"Document Content:"</h3>
                            <pre class="document-content">{content}</pre>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
pub fn DocumentDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    #[allow(unused_variables)]
    let navigate = use_navigate();
    #[allow(unused_variables)]
    let toasts = use_toasts();

    let documentId = move || params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    #[allow(unused_variables)]
    let (document, setDocument) = signal(Option::<Document>::None);
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(true);
    #[allow(unused_variables)]
    let (errorMessage, setErrorMessage) = signal(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use wasm_bindgen_futures::spawn_local;

        let Some(id) = documentId() else {
            setErrorMessage.set(Some("Document not found".into()));
            setLoading.set(false);
            return;
        };
        setLoading.set(true);
        spawn_local(async move {
            match async { crate::session::browser::api()?.documents().get(id).await }.await {
                Ok(found) => setDocument.set(Some(found)),
                Err(e) => setErrorMessage.set(Some(e.to_string())),
            }
            setLoading.set(false);
        });
    });

    let canVerify = move || {
        session.access().can_verify()
            && document.with(|d| d.as_ref().is_some_and(|d| d.verification() == Verification::Pending))
    };

    let onDelete = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::session::browser;
            use wasm_bindgen_futures::spawn_local;

            let Some(id) = documentId() else {
                return;
            };
            if !browser::confirm("Are you sure you want to delete this document?") {
                return;
            }
            let navigate = navigate.clone();
            spawn_local(async move {
                match async { browser::api()?.documents().delete(id).await }.await {
                    Ok(_) => {
                        if let Some(toasts) = toasts {
                            toasts.success("Document deleted");
                        }
                        navigate(locker_types::DOCUMENTS_PATH, Default::default());
                    }
                    Err(e) => setErrorMessage.set(Some(e.to_string())),
                }
            });
        }
    };

    let onVerify = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let Some(id) = documentId() else {
                return;
            };
            spawn_local(async move {
                match async { crate::session::browser::api()?.documents().verify(id).await }.await {
                    Ok(verified) => {
                        if let Some(toasts) = toasts {
                            toasts.success("Document verified");
                        }
                        setDocument.set(Some(verified));
                    }
                    Err(e) => setErrorMessage.set(Some(e.to_string())),
                }
            });
        }
    };

    let hasDocument = move || document.with(Option::is_some);

    view! {
        <div class="dashboard-header">
            <a class="btn btn-primary" href="/documents">
                "Back to Documents"
            </a>
        </div>

        {move || errorMessage.get().map(|message| view! { <div class="login-error">{message}</div> })}

        {move || {
            if loading.get() {
                return view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading document details..."
                    </div>
                }
                    .into_any();
            }
            match document.get() {
                Some(document) => {
                    view! {
                        <section class="card document-detail">
                            <div class="card-title">
                                {document.name.clone()}
                                <VerificationBadge verification=document.verification() />
                            </div>
                            <DocumentMetadata document=document />
                        </section>
                    }
                        .into_any()
                }
                None if errorMessage.with(Option::is_none) => {
                    view! { <div class="login-error">"Document not found"</div> }.into_any()
                }
                None => ().into_any(),
            }
        }}

        <div class="document-actions" class:hidden=move || !hasDocument()>
            <a
                class="btn btn-ghost"
                href=move || documentId().map(|id| format!("/documents/edit/{id}")).unwrap_or_default()
            >
                "Edit"
            </a>
            <button class="btn btn-danger" on:click=onDelete>
                "Delete"
            </button>
            <button class="btn btn-success" class:hidden=move || !canVerify() on:click=onVerify>
                "Verify"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_shows_content_block_only_when_present() {
        let document = Document {
            id: 4,
            name: "Lease".into(),
            kind: "Contract".into(),
            content: Some("Clause 1".into()),
            user_id: Some(3),
            user_name: Some("ravi".into()),
            created_at: Some("2024-01-05T10:30:00".into()),
            ..Default::default()
        };
        let html = Owner::new().with(|| view! { <DocumentMetadata document=document /> }.to_html());
        assert!(html.contains("Document Content:"));
        assert!(html.contains("Clause 1"));
        assert!(html.contains("Contract"));
        assert!(html.contains("ravi (#3)"));

        let bare = Document {
            id: 5,
            name: "Note".into(),
            ..Default::default()
        };
        let html = Owner::new().with(|| view! { <DocumentMetadata document=bare /> }.to_html());
        assert!(!html.contains("Document Content:"));
        assert!(!html.contains("Owner: "));
    }
}
