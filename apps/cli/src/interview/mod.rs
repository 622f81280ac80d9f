//! Interview core — session controller, transcript, and outcome extraction.

pub mod outcome;
pub mod prompts;
pub mod session;
pub mod transcript;

/// Number of model-driven questions per interview. A configuration constant,
/// never derived from model output: it bounds the question loop and is
/// interpolated into the interviewer prompt so the two cannot drift apart.
pub const QUESTION_COUNT: usize = 5;
