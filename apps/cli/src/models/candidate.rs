use serde::{Deserialize, Serialize};

/// An applicant with a backend-assigned id.
///
/// Constructed only after the backend has assigned the id — an interview
/// session cannot be created for a candidate that was never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
}
