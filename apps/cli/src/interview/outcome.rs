//! Outcome extraction — derives a structured {summary, score} pair from one
//! free-form analysis completion.
//!
//! This is best-effort structured extraction from unstructured text with a
//! defined failure mode, not a parser with a grammar: only the two literal
//! score templates requested in the analysis prompt are recognized.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::{CompletionProvider, LlmError};

use super::prompts::ANALYSIS_SYSTEM;
use super::transcript::{Transcript, Turn};

/// Advisory token budget for the analysis call.
const ANALYSIS_MAX_TOKENS: u32 = 500;

/// Matches "score out of 100: N" or "Score: N", case- and spacing-tolerant.
static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)score\s+out\s+of\s+100\s*:\s*(\d+)|score\s*:\s*(\d+)")
        .expect("score pattern is a valid regex")
});

/// The model deviated from the requested score format. Recoverable: the
/// caller surfaces a warning and skips result submission — a summary without
/// a score is never persisted.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no interview score found in analysis text")]
pub struct ExtractionFailed;

/// The derived result of one interview session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewOutcome {
    pub summary: String,
    pub score: Option<u32>,
}

impl InterviewOutcome {
    pub fn from_analysis(analysis: &str) -> Self {
        Self {
            summary: extract_summary(analysis).to_string(),
            score: extract_score(analysis).ok(),
        }
    }
}

/// Sends the candidate's answers for analysis and returns the raw analysis
/// text.
///
/// Only user-authored turns are analyzed. They travel as one composed,
/// numbered user message: the Messages API rejects consecutive same-role
/// turns, and the answers are what the analysis instruction scores.
pub async fn analyze(
    provider: &dyn CompletionProvider,
    transcript: &Transcript,
) -> Result<String, LlmError> {
    let answers: Vec<String> = transcript
        .user_turns()
        .enumerate()
        .map(|(i, turn)| format!("{}. {}", i + 1, turn.content))
        .collect();

    let turns = [Turn::user(format!(
        "Candidate responses:\n{}",
        answers.join("\n")
    ))];

    provider
        .complete(ANALYSIS_SYSTEM, &turns, ANALYSIS_MAX_TOKENS)
        .await
}

/// Searches the analysis text for either accepted score template and returns
/// the first matched integer.
pub fn extract_score(analysis: &str) -> Result<u32, ExtractionFailed> {
    let captures = SCORE_PATTERN.captures(analysis).ok_or(ExtractionFailed)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .ok_or(ExtractionFailed)?
        .as_str()
        .parse()
        .map_err(|_| ExtractionFailed)
}

/// Takes the text preceding the first blank line as the summary; the whole
/// text when there is none. A heuristic: depending on how the model formats
/// its analysis this yields either the leading paragraph or everything.
pub fn extract_summary(analysis: &str) -> &str {
    analysis.split("\n\n").next().unwrap_or(analysis)
}
