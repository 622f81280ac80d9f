use serde::{Deserialize, Serialize};

/// Wire payload for a persisted interview result.
///
/// `similarity_score` is a placeholder the backend schema requires; this
/// client always sends 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResultRecord {
    pub candidate_id: i64,
    pub job_desc_id: i64,
    pub summary: String,
    pub similarity_score: u32,
    pub interview_score: u32,
}

impl InterviewResultRecord {
    pub fn new(candidate_id: i64, job_desc_id: i64, summary: String, interview_score: u32) -> Self {
        Self {
            candidate_id,
            job_desc_id,
            summary,
            similarity_score: 0,
            interview_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_score_is_always_zero() {
        let record = InterviewResultRecord::new(7, 1, "Strong candidate.".to_string(), 91);
        assert_eq!(record.similarity_score, 0);
    }

    #[test]
    fn test_serializes_all_backend_fields() {
        let record = InterviewResultRecord::new(7, 1, "Great communicator.".to_string(), 91);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["candidate_id"], 7);
        assert_eq!(json["job_desc_id"], 1);
        assert_eq!(json["summary"], "Great communicator.");
        assert_eq!(json["similarity_score"], 0);
        assert_eq!(json["interview_score"], 91);
    }
}
