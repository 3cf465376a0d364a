//! Personal memo DTOs. A user has at most one memo per bar.

use serde::{Deserialize, Serialize};

use super::foundation::MemoId;

/// Body of `PUT /bars/{barId}/memo` (create or replace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertMemoRequest {
    pub content: String,
}

impl UpsertMemoRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: MemoId,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}
