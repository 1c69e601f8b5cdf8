use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AdminResource;
use crate::table::{CellValue, RowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Photo,
    Story,
    Testimonial,
    #[serde(other)]
    Other,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Photo => "Foto",
            Self::Story => "Cerita",
            Self::Testimonial => "Testimoni",
            Self::Other => "Lainnya",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Menunggu",
            Self::Approved => "Disetujui",
            Self::Rejected => "Ditolak",
        }
    }
}

/// Photos, stories and testimonials submitted by customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContent {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub author_name: String,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserContent {
    /// First characters of the body for table cells.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}…")
        } else {
            head
        }
    }
}

impl AdminResource for UserContent {
    const PATH: &'static str = "user-contents";
    const NAME: &'static str = "konten pengguna";

    fn id(&self) -> u64 {
        self.id
    }
}

impl RowRecord for UserContent {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "type" => self.kind.label().into(),
            "title" => self.title.as_str().into(),
            "content" => self.content.as_str().into(),
            "author_name" => self.author_name.as_str().into(),
            "status" => self.status.label().into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_type_field_and_tolerates_new_kinds() {
        let content: UserContent = serde_json::from_str(
            r#"{"id":4,"type":"video","author_name":"Rina","content":"Hari bahagia kami","status":"approved"}"#,
        )
        .unwrap();
        assert_eq!(content.kind, ContentKind::Other);
        assert_eq!(content.status, ModerationStatus::Approved);
        assert_eq!(content.excerpt(4), "Hari…");
        assert_eq!(content.excerpt(100), "Hari bahagia kami");
    }
}
