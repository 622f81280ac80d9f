use serde::{Deserialize, Serialize};

/// A job posting from the catalog. Immutable once fetched; one is selected per session.
///
/// `role_name` values are assumed unique across the catalog — selection is
/// presented by name, so the backend must uphold that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub role_name: String,
    pub role_description: String,
}
