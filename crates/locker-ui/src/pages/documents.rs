use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use locker_types::Document;

use crate::components::document_card::DocumentGrid;
use crate::components::toast::use_toasts;
use crate::session::use_session;

pub const EMPTY_MESSAGE: &str = "No documents found. Add your first document!";

/// Which documents the list page asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    All,
    Search(String),
}

impl Listing {
    /// A blank search term lists everything.
    pub fn from_term(term: &str) -> Self {
        match term.trim() {
            "" => Listing::All,
            name => Listing::Search(name.to_string()),
        }
    }
}

/// Loaded document list, or the empty-state message when there is nothing
/// to show.
#[component]
pub fn DocumentList<D, V>(
    documents: Vec<Document>,
    can_verify: bool,
    on_delete: D,
    on_verify: V,
) -> impl IntoView
where
    D: Fn(i64) + Clone + 'static,
    V: Fn(i64) + Clone + 'static,
{
    if documents.is_empty() {
        view! {
            <div class="container-empty">
                <p>{EMPTY_MESSAGE}</p>
            </div>
        }
            .into_any()
    } else {
        view! {
            <DocumentGrid
                documents=documents
                can_verify=can_verify
                on_delete=on_delete
                on_verify=on_verify
            />
        }
            .into_any()
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let session = use_session();
    #[allow(unused_variables)]
    let toasts = use_toasts();

    // None while a request is in flight
    #[allow(unused_variables)]
    let (documents, setDocuments) = signal(Option::<Vec<Document>>::None);
    #[allow(unused_variables)]
    let (errorMessage, setErrorMessage) = signal(Option::<String>::None);
    let searchTerm = RwSignal::new(String::new());

    let refresh = move |listing: Listing| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            setDocuments.set(None);
            spawn_local(async move {
                let result = async {
                    let service = crate::session::browser::api()?.documents();
                    match listing {
                        Listing::All => service.list().await,
                        Listing::Search(name) => service.search(&name).await,
                    }
                }
                .await;
                match result {
                    Ok(list) => setDocuments.set(Some(list)),
                    Err(e) => {
                        setErrorMessage.set(Some(e.to_string()));
                        setDocuments.set(Some(Vec::new()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = listing;
    };

    #[cfg(feature = "hydrate")]
    refresh(Listing::All);

    let onSearch = move |ev: SubmitEvent| {
        ev.prevent_default();
        setErrorMessage.set(None);
        refresh(searchTerm.with_untracked(|term| Listing::from_term(term)));
    };

    let onClear = move |_: leptos::ev::MouseEvent| {
        searchTerm.set(String::new());
        setErrorMessage.set(None);
        refresh(Listing::All);
    };

    #[allow(unused_variables)]
    let onDelete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use crate::session::browser;
            use wasm_bindgen_futures::spawn_local;

            if !browser::confirm("Are you sure you want to delete this document?") {
                return;
            }
            spawn_local(async move {
                match async { browser::api()?.documents().delete(id).await }.await {
                    Ok(_) => {
                        if let Some(toasts) = toasts {
                            toasts.success("Document deleted");
                        }
                        refresh(Listing::All);
                    }
                    Err(e) => setErrorMessage.set(Some(e.to_string())),
                }
            });
        }
    };

    #[allow(unused_variables)]
    let onVerify = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                match async { crate::session::browser::api()?.documents().verify(id).await }.await {
                    Ok(verified) => {
                        if let Some(toasts) = toasts {
                            toasts.success(format!("{} verified", verified.name));
                        }
                        refresh(Listing::All);
                    }
                    Err(e) => setErrorMessage.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <div>
                <h1>"My Documents"</h1>
                <p class="subtitle">"Everything stored in your locker"</p>
            </div>
            <a class="btn btn-success" href="/documents/new">
                "Add New Document"
            </a>
        </div>

        <form class="search-bar" on:submit=onSearch>
            <input
                type="text"
                placeholder="Search by document name"
                prop:value=searchTerm
                on:input=move |ev| searchTerm.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-ghost">
                "Search"
            </button>
            <button
                type="button"
                class="btn btn-ghost"
                class:hidden=move || searchTerm.with(String::is_empty)
                on:click=onClear
            >
                "Clear"
            </button>
        </form>

        {move || errorMessage.get().map(|message| view! { <div class="login-error">{message}</div> })}

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
                view! {
                    <DocumentList
                        documents=list
                        can_verify=session.access().can_verify()
                        on_delete=onDelete
                        on_verify=onVerify
                    />
                }
                    .into_any()
            }
        }}
    }
}
