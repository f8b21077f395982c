use serde::{Deserialize, Serialize};

/// A stored document as returned by the backend.
///
/// The backend is not consistent about field names across endpoints (the
/// pending-verification listing uses `title`, `documentType` and a nested
/// `user`), so decoding accepts every spelling seen on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(rename = "type", alias = "fileType", alias = "documentType", default)]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<OwnerRef>,
    #[serde(default, alias = "uploadDate")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct OwnerRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
}

/// Display state of the verification flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Pending,
}

impl Verification {
    pub fn label(self) -> &'static str {
        match self {
            Verification::Verified => "Verified",
            Verification::Pending => "Pending Verification",
        }
    }
}

impl Document {
    pub fn verification(&self) -> Verification {
        if self.verified {
            Verification::Verified
        } else {
            Verification::Pending
        }
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.user_name
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.username.as_str()))
            .filter(|name| !name.is_empty())
    }

    pub fn owner_id(&self) -> Option<i64> {
        self.user_id.or_else(|| self.user.as_ref().and_then(|u| u.id))
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Editable subset sent on create and update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub content: String,
}

/// Required draft field left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Kind,
}

impl DraftField {
    pub fn message(self) -> &'static str {
        match self {
            DraftField::Name => "Name is required",
            DraftField::Kind => "Type is required",
        }
    }
}

impl DocumentDraft {
    /// Required fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(DraftField::Name);
        }
        if self.kind.trim().is_empty() {
            missing.push(DraftField::Kind);
        }
        missing
    }
}

impl From<&Document> for DocumentDraft {
    fn from(document: &Document) -> Self {
        Self {
            name: document.name.clone(),
            kind: document.kind.clone(),
            description: document.description_text().to_string(),
            content: document.content_text().to_string(),
        }
    }
}

/// Date part of a backend timestamp (`2024-03-01T10:15:00` -> `2024-03-01`).
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Timestamp without the `T` separator and fractional seconds.
pub fn date_time_part(timestamp: &str) -> String {
    let trimmed = timestamp.split('.').next().unwrap_or(timestamp);
    trimmed.replacen('T', " ", 1)
}
