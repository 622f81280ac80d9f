// All LLM prompt constants for the interview module.

use super::QUESTION_COUNT;

/// Interviewer system prompt template.
/// Replace: {question_count}, {job_description}, {candidate_name}.
const INTERVIEWER_SYSTEM_TEMPLATE: &str = "You are an experienced HR interviewer who has \
screened hundreds of applications. Ask {question_count} questions about the candidate's \
profile, background, and experience, based on the job description and candidate name below. \
Ask only one question at a time, so the candidate can answer each question in turn.\n\
Job Description: {job_description}\n\
Candidate Name: {candidate_name}\n\
Start with a personalized greeting and briefly introduce the role before asking your \
first question.";

/// System prompt for the analysis call. The two score formats named here are
/// the only ones `outcome::extract_score` accepts.
pub const ANALYSIS_SYSTEM: &str = "Analyze the following interview responses and provide \
a summary. Also, give a score out of 100, in the format 'score out of 100: <score>' or \
'Score: <score>'.";

/// Fixed closing line appended after the final answer. No completion call is
/// made for it.
pub const CLOSING_MESSAGE: &str = "Thank you for your time. We will get back to you soon.";

/// Builds the interviewer system prompt for one session.
pub fn interviewer_system(candidate_name: &str, job_description: &str) -> String {
    INTERVIEWER_SYSTEM_TEMPLATE
        .replace("{question_count}", &QUESTION_COUNT.to_string())
        .replace("{job_description}", job_description)
        .replace("{candidate_name}", candidate_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interviewer_system_fills_all_placeholders() {
        let prompt = interviewer_system("Ada", "Builds things");
        assert!(prompt.contains("Ada"));
        assert!(prompt.contains("Builds things"));
        assert!(prompt.contains(&QUESTION_COUNT.to_string()));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_analysis_system_names_both_score_formats() {
        assert!(ANALYSIS_SYSTEM.contains("score out of 100:"));
        assert!(ANALYSIS_SYSTEM.contains("Score:"));
    }
}
