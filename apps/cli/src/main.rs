mod backend;
mod config;
mod interview;
mod llm_client;
mod models;
mod ui;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::{Backend, HttpBackend};
use crate::config::Config;
use crate::interview::session::{InterviewSession, InterviewerReply, ResultSubmission};
use crate::llm_client::LlmClient;
use crate::models::candidate::Candidate;
use crate::ui::Ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hireflow v{}", env!("CARGO_PKG_VERSION"));

    let backend = HttpBackend::new(config.backend_base_url.clone());
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let mut ui = Ui::new()?;

    // Job catalog. A failed fetch is reported and treated as an empty catalog.
    let jobs = match backend.fetch_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => {
            error!("Failed to fetch job data: {e}");
            ui.error(&format!("Failed to fetch job data: {e}"));
            Vec::new()
        }
    };
    if jobs.is_empty() {
        ui.warn("No job postings are available right now.");
        return Ok(());
    }

    let Some(job) = ui.select_job(&jobs)? else {
        return Ok(());
    };
    let job = job.clone();

    // Application form. A candidate exists only once the backend assigns an
    // id; a failed submission is retryable from the form.
    let candidate = loop {
        let Some((name, email)) = ui.application_form()? else {
            return Ok(());
        };
        match backend.submit_candidate(&name, &email).await {
            Ok(id) => {
                ui.success("Application submitted successfully!");
                break Candidate { id, name, email };
            }
            Err(e) => {
                error!("Failed to submit application: {e}");
                ui.error(&format!("Failed to submit application: {e}"));
                if !ui.confirm("Try again?")? {
                    return Ok(());
                }
            }
        }
    };

    let session = InterviewSession::new(job, candidate);
    run_interview(&mut ui, session, &llm, &backend).await
}

/// Drives the chat loop: opening, five answers, closing, then analysis and
/// result submission. Step failures are surfaced and retryable; abandoning
/// any prompt ends the session without a persisted result.
async fn run_interview(
    ui: &mut Ui,
    mut session: InterviewSession,
    llm: &LlmClient,
    backend: &dyn Backend,
) -> Result<()> {
    let opening = loop {
        match session.begin(llm).await {
            Ok(opening) => break opening,
            Err(e) => {
                error!("Failed to start the interview: {e}");
                ui.error(&format!("Failed to start the interview: {e}"));
                if !ui.confirm("Try again?")? {
                    return Ok(());
                }
            }
        }
    };
    ui.show_interviewer(&opening);

    loop {
        let Some(answer) = ui.read_answer()? else {
            info!("Interview abandoned by the candidate");
            return Ok(());
        };
        match session.submit_answer(llm, &answer).await {
            Ok(InterviewerReply::Question(question)) => ui.show_interviewer(&question),
            Ok(InterviewerReply::Closing(message)) => {
                ui.show_interviewer(&message);
                break;
            }
            Err(e) => {
                // The answer was not recorded; the candidate sends it again.
                error!("Completion request failed: {e}");
                ui.error(&format!(
                    "The interviewer is unavailable ({e}). Please send your answer again."
                ));
            }
        }
    }

    let report = loop {
        match session.conclude(llm, backend).await {
            Ok(report) => break report,
            Err(e) => {
                error!("Interview analysis failed: {e}");
                ui.error(&format!("Interview analysis failed: {e}"));
                if !ui.confirm("Retry the analysis?")? {
                    return Ok(());
                }
            }
        }
    };

    match report.submission {
        ResultSubmission::Submitted => ui.success("Interview results submitted successfully!"),
        ResultSubmission::Failed(message) => {
            ui.warn(&format!("Failed to submit interview results: {message}"));
        }
        ResultSubmission::SkippedNoScore => {
            ui.warn("Failed to extract an interview score. Analysis format might have changed; results were not submitted.");
        }
    }

    Ok(())
}
