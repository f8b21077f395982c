use leptos::prelude::*;
use locker_types::{date_part, Document, Verification};

pub fn badge_class(verification: Verification) -> &'static str {
    match verification {
        Verification::Verified => "badge badge-verified",
        Verification::Pending => "badge badge-pending",
    }
}

#[component]
pub fn VerificationBadge(verification: Verification) -> impl IntoView {
    view! { <span class=badge_class(verification)>{verification.label()}</span> }
}

/// One card per document, in the order given.
#[component]
pub fn DocumentGrid<D, V>(
    documents: Vec<Document>,
    /// Show the Verify action on pending documents
    can_verify: bool,
    on_delete: D,
    on_verify: V,
) -> impl IntoView
where
    D: Fn(i64) + Clone + 'static,
    V: Fn(i64) + Clone + 'static,
{
    view! {
        <div class="document-grid">
            {documents
                .into_iter()
                .map(|document| {
                    view! {
                        <DocumentCard
                            document=document
                            can_verify=can_verify
                            on_delete=on_delete.clone()
                            on_verify=on_verify.clone()
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DocumentCard<D, V>(document: Document, can_verify: bool, on_delete: D, on_verify: V) -> impl IntoView
where
    D: Fn(i64) + Clone + 'static,
    V: Fn(i64) + Clone + 'static,
{
    let id = document.id;
    let verification = document.verification();
    let showVerify = can_verify && verification == Verification::Pending;
    let updated = document
        .updated_at
        .as_deref()
        .map(|t| date_part(t).to_string())
        .unwrap_or_else(|| "-".into());

    view! {
        <article class="document-card">
            <h3 class="document-name">{document.name.clone()}</h3>
            <div class="document-type">{document.kind.clone()}</div>
            <p class="document-description">{document.description_text().to_string()}</p>
            <VerificationBadge verification=verification />
            <div class="document-actions">
                <a class="btn btn-primary btn-sm" href=format!("/documents/{id}")>
                    "View"
                </a>
                <a class="btn btn-ghost btn-sm" href=format!("/documents/edit/{id}")>
                    "Edit"
                </a>
                <button class="btn btn-danger btn-sm" on:click=move |_| on_delete(id)>
                    "Delete"
                </button>
                {showVerify
                    .then(|| {
                        view! {
                            <button class="btn btn-success btn-sm" on:click=move |_| on_verify(id)>
                                "Verify"
                            </button>
                        }
                    })}
            </div>
            <div class="document-footer">"Last Updated: " {updated}</div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(id: i64, name: &str, verified: bool) -> Document {
        Document {
            id,
            name: name.into(),
            kind: "ID Card".into(),
            description: Some(format!("{name} scan")),
            verified,
            updated_at: Some("2024-03-02T08:00:00".into()),
            ..Default::default()
        }
    }

    fn render(documents: Vec<Document>, can_verify: bool) -> String {
        Owner::new().with(|| {
            view! {
                <DocumentGrid
                    documents=documents
                    can_verify=can_verify
                    on_delete=|_: i64| {}
                    on_verify=|_: i64| {}
                />
            }
                .to_html()
        })
    }

    #[test]
    fn renders_one_card_per_document() {
        let html = render(
            vec![
                document(1, "Passport", true),
                document(2, "PAN Card", false),
                document(3, "Voter ID", false),
            ],
            false,
        );
        assert_eq!(html.matches("<article class=\"document-card\"").count(), 3);
        assert!(html.contains("Passport"));
        assert!(html.contains("/documents/edit/2"));
        assert!(html.contains("Last Updated: "));
        assert!(html.contains("2024-03-02"));
    }

    #[test]
    fn verification_flag_has_distinct_states() {
        let html = render(vec![document(1, "Passport", true), document(2, "PAN Card", false)], false);
        assert_eq!(html.matches("badge badge-verified").count(), 1);
        assert_eq!(html.matches("badge badge-pending").count(), 1);
        assert!(html.contains("Pending Verification"));
        assert!(!html.contains(">Verify<"));
    }

    #[test]
    fn verify_action_only_for_privileged_on_pending() {
        let html = render(vec![document(1, "Passport", true), document(2, "PAN Card", false)], true);
        assert_eq!(html.matches(">Verify<").count(), 1);
    }

    #[test]
    fn empty_list_renders_no_cards() {
        let html = render(Vec::new(), true);
        assert!(!html.contains("document-card"));
    }
}
