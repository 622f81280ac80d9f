//! Terminal surface — job selection, application form, and the chat view.
//!
//! Everything here is presentation: the interview core never prints or reads.
//! Ctrl-C / Ctrl-D at any prompt abandons the current step and is surfaced as
//! `None` so the caller can wind down cleanly.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::models::job::JobPosting;

pub struct Ui {
    editor: DefaultEditor,
}

impl Ui {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Reads one line; `None` on interrupt or end-of-input.
    fn readline(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Re-prompts until a non-empty value arrives (presence check only).
    fn required_field(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.readline(prompt)? {
                None => return Ok(None),
                Some(value) if value.is_empty() => {
                    self.warn("This field is required.");
                }
                Some(value) => return Ok(Some(value)),
            }
        }
    }

    /// Presents the catalog by role name and returns the selected posting.
    pub fn select_job<'a>(&mut self, jobs: &'a [JobPosting]) -> Result<Option<&'a JobPosting>> {
        println!("\n{}", "Available Jobs".bold());
        for (i, job) in jobs.iter().enumerate() {
            println!("  {}. {}", i + 1, job.role_name);
        }

        let prompt = format!("Select a job [1-{}]: ", jobs.len());
        loop {
            let Some(input) = self.readline(&prompt)? else {
                return Ok(None);
            };
            match input.parse::<usize>() {
                Ok(n) if (1..=jobs.len()).contains(&n) => {
                    let job = &jobs[n - 1];
                    println!("\n{}", "Job Description".bold());
                    println!("{}\n", job.role_description);
                    return Ok(Some(job));
                }
                _ => self.warn("Please enter one of the listed numbers."),
            }
        }
    }

    /// Application form: name and email, both required non-empty.
    pub fn application_form(&mut self) -> Result<Option<(String, String)>> {
        println!("{}", "Application Form".bold());
        let Some(name) = self.required_field("Name: ")? else {
            return Ok(None);
        };
        let Some(email) = self.required_field("Email: ")? else {
            return Ok(None);
        };
        Ok(Some((name, email)))
    }

    pub fn show_interviewer(&self, text: &str) {
        println!("\n{} {}", "Interviewer:".cyan().bold(), text);
    }

    /// Reads one candidate answer; re-prompts on empty input.
    pub fn read_answer(&mut self) -> Result<Option<String>> {
        self.required_field("\nYou: ")
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let prompt = format!("{question} [y/N] ");
        match self.readline(&prompt)? {
            Some(answer) => Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes")),
            None => Ok(false),
        }
    }

    pub fn success(&self, message: &str) {
        println!("{}", message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{}", message.yellow());
    }

    pub fn error(&self, message: &str) {
        println!("{}", message.red());
    }
}
