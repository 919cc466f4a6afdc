use serde::{Deserialize, Serialize};

/// A committee member row. `name` may be empty: such a row is a placeholder
/// that exists only to carry a `section_order` for an otherwise-empty
/// section. The JSON field for the section grouping key is `type`, matching
/// the admin UI.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeMember {
    pub id: i64,
    pub name: String,
    pub designation: String,
    pub organization: String,
    #[serde(rename = "type")]
    pub member_type: String,
    pub section_order: i64,
    #[serde(rename = "order")]
    pub member_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommitteeMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub organization: String,
    #[serde(rename = "type")]
    pub member_type: String,
    #[serde(default)]
    pub section_order: i64,
    #[serde(default, rename = "order")]
    pub member_order: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommitteeMember {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub organization: Option<String>,
    #[serde(rename = "type")]
    pub member_type: Option<String>,
    pub section_order: Option<i64>,
    #[serde(rename = "order")]
    pub member_order: Option<i64>,
}

/// A committee entry defined in code rather than in the store. Static
/// entries predate the admin UI and keep appearing until an admin promotes
/// them into database rows.
#[derive(Debug, Clone, Copy)]
pub struct StaticEntry {
    pub name: &'static str,
    pub designation: &'static str,
    pub organization: &'static str,
    pub member_type: &'static str,
}

/// One displayed member in the aggregated view: a database row (has an id,
/// editable in place) or an expanded static entry (no id; editing one
/// creates a new database row instead).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedMember {
    pub id: Option<i64>,
    pub name: String,
    pub designation: String,
    pub organization: String,
    #[serde(rename = "order")]
    pub member_order: i64,
    pub is_static: bool,
}

/// A named section of the aggregated committee page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeSection {
    #[serde(rename = "type")]
    pub member_type: String,
    pub section_order: i64,
    /// True when a hidden empty-name row exists for this section, so the UI
    /// can offer section settings even with zero displayed members.
    pub has_placeholder: bool,
    pub members: Vec<AggregatedMember>,
}
