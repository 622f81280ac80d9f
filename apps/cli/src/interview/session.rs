#![allow(dead_code)]

//! Interview session controller — drives a bounded question/answer loop as a
//! strict alternating turn sequence, terminating deterministically after a
//! fixed number of questions.
//!
//! One session owns one job, one candidate, and one transcript. The full
//! accumulated transcript is forwarded as context on every completion
//! request — no truncation, no summarization. The question cap keeps it
//! bounded in practice.

use thiserror::Error;
use tracing::{info, warn};

use crate::backend::Backend;
use crate::llm_client::{CompletionProvider, LlmError};
use crate::models::candidate::Candidate;
use crate::models::interview::InterviewResultRecord;
use crate::models::job::JobPosting;

use super::outcome::{self, InterviewOutcome};
use super::prompts::{interviewer_system, CLOSING_MESSAGE};
use super::transcript::{Transcript, Turn};
use super::QUESTION_COUNT;

/// Advisory token budget for question-generation calls.
const QUESTION_MAX_TOKENS: u32 = 150;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("completion request failed: {0}")]
    Completion(#[from] LlmError),

    #[error("the interview has already started")]
    AlreadyStarted,

    #[error("the interview is not accepting answers")]
    NotAcceptingAnswers,

    #[error("the interview is not ready to conclude")]
    NotConcludable,
}

/// Lifecycle of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// `n` follow-up questions asked so far; the opening utterance carries
    /// the first question, follow-ups are capped at `QUESTION_COUNT - 1`.
    Asking(usize),
    Closing,
    /// Terminal. No further turns accepted.
    Done,
}

/// The interviewer's side of one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewerReply {
    Question(String),
    Closing(String),
}

/// What happened to the result at the end of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSubmission {
    Submitted,
    Failed(String),
    /// No score could be extracted — a summary without a score is never
    /// persisted, so submission was skipped entirely.
    SkippedNoScore,
}

/// Everything `conclude` hands back to the user surface.
#[derive(Debug, Clone)]
pub struct InterviewReport {
    pub outcome: InterviewOutcome,
    pub submission: ResultSubmission,
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

/// One interview session: created after a candidate id has been assigned,
/// dropped when the workflow ends.
pub struct InterviewSession {
    job: JobPosting,
    candidate: Candidate,
    /// Built once at creation and reused for every question request.
    system_prompt: String,
    transcript: Transcript,
    phase: Phase,
}

impl InterviewSession {
    pub fn new(job: JobPosting, candidate: Candidate) -> Self {
        let system_prompt = interviewer_system(&candidate.name, &job.role_description);
        Self {
            job,
            candidate,
            system_prompt,
            transcript: Transcript::new(),
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Monotonically non-decreasing, never exceeding `QUESTION_COUNT - 1`.
    pub fn question_index(&self) -> usize {
        match self.phase {
            Phase::NotStarted => 0,
            Phase::Asking(n) => n,
            Phase::Closing | Phase::Done => QUESTION_COUNT - 1,
        }
    }

    /// Requests the opening utterance (greeting + first question) and
    /// transitions `NotStarted → Asking(0)`.
    ///
    /// Generated exactly once per session: a second call is an error, so the
    /// greeting can never be recomputed mid-interview.
    pub async fn begin(
        &mut self,
        provider: &dyn CompletionProvider,
    ) -> Result<String, SessionError> {
        if self.phase != Phase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        let opening = provider
            .complete(&self.system_prompt, self.transcript.turns(), QUESTION_MAX_TOKENS)
            .await?;

        self.transcript.push_assistant(opening.clone());
        self.phase = Phase::Asking(0);
        info!(
            "Interview started for candidate {} (job {})",
            self.candidate.id, self.job.id
        );
        Ok(opening)
    }

    /// Accepts one candidate answer and returns the interviewer's reply:
    /// the next question, or the fixed closing line once the final answer
    /// has arrived.
    ///
    /// The transcript is only committed once the completion call succeeds, so
    /// a failed call leaves the session unchanged and the same answer can be
    /// resubmitted.
    pub async fn submit_answer(
        &mut self,
        provider: &dyn CompletionProvider,
        answer: &str,
    ) -> Result<InterviewerReply, SessionError> {
        let Phase::Asking(asked) = self.phase else {
            return Err(SessionError::NotAcceptingAnswers);
        };

        if asked + 1 < QUESTION_COUNT {
            let mut context: Vec<Turn> = self.transcript.turns().to_vec();
            context.push(Turn::user(answer));

            let question = provider
                .complete(&self.system_prompt, &context, QUESTION_MAX_TOKENS)
                .await?;

            self.transcript.push_user(answer);
            self.transcript.push_assistant(question.clone());
            self.phase = Phase::Asking(asked + 1);
            Ok(InterviewerReply::Question(question))
        } else {
            // Final answer: close out without another completion call.
            self.transcript.push_user(answer);
            self.transcript.push_assistant(CLOSING_MESSAGE);
            self.phase = Phase::Closing;
            info!("Interview closed after {QUESTION_COUNT} questions");
            Ok(InterviewerReply::Closing(CLOSING_MESSAGE.to_string()))
        }
    }

    /// Runs outcome extraction over the transcript, transitions
    /// `Closing → Done`, and — when a score was derived — posts the result.
    ///
    /// A failed analysis call propagates and leaves the phase at `Closing` so
    /// it can be retried. Result-post failure is reported but does not alter
    /// the terminal state.
    pub async fn conclude(
        &mut self,
        provider: &dyn CompletionProvider,
        backend: &dyn Backend,
    ) -> Result<InterviewReport, SessionError> {
        if self.phase != Phase::Closing {
            return Err(SessionError::NotConcludable);
        }

        let analysis = outcome::analyze(provider, &self.transcript).await?;
        let outcome = InterviewOutcome::from_analysis(&analysis);
        self.phase = Phase::Done;

        let submission = match outcome.score {
            Some(score) => {
                let record = InterviewResultRecord::new(
                    self.candidate.id,
                    self.job.id,
                    outcome.summary.clone(),
                    score,
                );
                match backend.submit_interview(&record).await {
                    Ok(()) => {
                        info!(
                            "Interview result submitted for candidate {} (score {score})",
                            self.candidate.id
                        );
                        ResultSubmission::Submitted
                    }
                    Err(e) => {
                        warn!("Failed to submit interview result: {e}");
                        ResultSubmission::Failed(e.to_string())
                    }
                }
            }
            None => {
                warn!("No score could be extracted from the analysis; skipping result submission");
                ResultSubmission::SkippedNoScore
            }
        };

        Ok(InterviewReport { outcome, submission })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
