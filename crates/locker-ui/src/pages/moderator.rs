use leptos::prelude::*;
use locker_types::{date_part, Document};

use crate::components::card::Card;
use crate::components::toast::use_toasts;

#[component]
fn PendingRow<V, R>(document: Document, on_verify: V, on_reject: R) -> impl IntoView
where
    V: Fn(i64) + 'static,
    R: Fn(i64) + 'static,
{
    let id = document.id;
    let uploaded = document
        .created_at
        .as_deref()
        .map(|t| date_part(t).to_string())
        .unwrap_or_else(|| "-".into());

    view! {
        <tr>
            <td>{id}</td>
            <td>{document.name.clone()}</td>
            <td>{document.kind.clone()}</td>
            <td>{document.owner_name().unwrap_or("-").to_string()}</td>
            <td>{uploaded}</td>
            <td>
                <span class="badge badge-pending">"Pending"</span>
            </td>
            <td class="row-actions">
                <a class="btn btn-primary btn-sm" href=format!("/documents/{id}")>
                    "View"
                </a>
                <button class="btn btn-success btn-sm" on:click=move |_| on_verify(id)>
                    "Verify"
                </button>
                <button class="btn btn-danger btn-sm" on:click=move |_| on_reject(id)>
                    "Reject"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn PendingTable<V, R>(documents: Vec<Document>, on_verify: V, on_reject: R) -> impl IntoView
where
    V: Fn(i64) + Clone + 'static,
    R: Fn(i64) + Clone + 'static,
{
    if documents.is_empty() {
        return view! { <p class="container-empty">"No documents pending verification."</p> }
            .into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Type"</th>
                    <th>"Uploaded By"</th>
                    <th>"Upload Date"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {documents
                    .into_iter()
                    .map(|document| {
                        view! {
                            <PendingRow
                                document=document
                                on_verify=on_verify.clone()
                                on_reject=on_reject.clone()
                            />
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
        .into_any()
}

#[component]
pub fn ModeratorPage() -> impl IntoView {
    #[allow(unused_variables)]
    let toasts = use_toasts();
    #[allow(unused_variables)]
    let (documents, setDocuments) = signal(Option::<Vec<Document>>::None);
    #[allow(unused_variables)]
    let (errorMessage, setErrorMessage) = signal(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            match async { crate::session::browser::api()?.documents().unverified().await }.await {
                Ok(list) => setDocuments.set(Some(list)),
                Err(e) => {
                    setErrorMessage.set(Some(format!("Failed to fetch documents. {e}")));
                    setDocuments.set(Some(Vec::new()));
                }
            }
        });
    }

    // Reviewed rows leave the table without a reload.
    #[allow(unused_variables)]
    let removeRow = move |id: i64| {
        setDocuments.update(|list| {
            if let Some(list) = list {
                list.retain(|d| d.id != id);
            }
        });
    };

    #[allow(unused_variables)]
    let onVerify = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match async { crate::session::browser::api()?.documents().verify(id).await }.await {
                    Ok(_) => {
                        removeRow(id);
                        if let Some(toasts) = toasts {
                            toasts.success("Document verified");
                        }
                    }
                    Err(e) => setErrorMessage.set(Some(format!("Failed to verify document. {e}"))),
                }
            });
        }
    };

    #[allow(unused_variables)]
    let onReject = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match async { crate::session::browser::api()?.documents().reject(id).await }.await {
                    Ok(_) => {
                        removeRow(id);
                        if let Some(toasts) = toasts {
                            toasts.success("Document rejected");
                        }
                    }
                    Err(e) => setErrorMessage.set(Some(format!("Failed to reject document. {e}"))),
                }
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Moderator Dashboard"</h1>
            <p class="subtitle">"Review uploads awaiting verification"</p>
        </div>

        {move || errorMessage.get().map(|message| view! { <div class="login-error">{message}</div> })}

        <Card title="Documents Pending Verification">
            {move || match documents.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading documents..."
                        </div>
                    }
                        .into_any()
                }
                Some(list) => {
                    view! { <PendingTable documents=list on_verify=onVerify on_reject=onReject /> }
                        .into_any()
                }
            }}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_listing_uses_upload_fields() {
        let body = r#"[{
            "id": 9,
            "title": "Birth Certificate",
            "documentType": "Certificate",
            "user": {"id": 3, "username": "ravi"},
            "uploadDate": "2024-02-11T09:00:00",
            "verified": false
        }]"#;
        let documents: Vec<Document> = serde_json::from_str(body).unwrap();
        let html = Owner::new().with(|| {
            view! { <PendingTable documents=documents on_verify=|_: i64| {} on_reject=|_: i64| {} /> }
                .to_html()
        });
        assert!(html.contains("Birth Certificate"));
        assert!(html.contains("Certificate"));
        assert!(html.contains("ravi"));
        assert!(html.contains("2024-02-11"));
        assert!(html.contains("/documents/9"));
    }

    #[test]
    fn empty_queue_message() {
        let html = Owner::new().with(|| {
            view! { <PendingTable documents=Vec::new() on_verify=|_: i64| {} on_reject=|_: i64| {} /> }
                .to_html()
        });
        assert!(html.contains("No documents pending verification."));
    }
}
