//! Read a saved payload, render it, write the HTML.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use af2_report::{
    ViewerConfig, decode_recent, decode_report, render_document, render_report,
    render_trusted_list,
};
use anyhow::{Context, Result};
use tracing::info;

/// Which payload the input holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    /// `POST /report` response
    Report,
    /// `GET /recent` response
    Recent,
}

/// One render job.
#[derive(Debug)]
pub struct Job {
    pub payload: Payload,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub document: bool,
    pub title: Option<String>,
}

/// Run a job end to end.
pub fn run(job: &Job, config: &ViewerConfig) -> Result<()> {
    let body = read_input(job.input.as_deref())?;
    let html = render_body(job, &body, config)?;
    write_output(job.output.as_deref(), &html)
}

/// Decode `body` and produce the HTML for `job`.
pub fn render_body(job: &Job, body: &str, config: &ViewerConfig) -> Result<String> {
    let fragment = match job.payload {
        Payload::Report => {
            let report = decode_report(body).context("Failed to decode report payload")?;
            info!(
                relations = report.relations.len(),
                shown = report.visible_relations().count(),
                score_keys = report.score.len(),
                "rendering report"
            );
            render_report(&report, config)
        }
        Payload::Recent => {
            let recent = decode_recent(body).context("Failed to decode recent payload")?;
            info!(trusted = recent.trusted.len(), "rendering trusted list");
            render_trusted_list(&recent, config)
        }
    };

    if !job.document {
        return Ok(fragment);
    }
    let title = job.title.clone().unwrap_or_else(|| match job.payload {
        Payload::Report => "Relations report".to_string(),
        Payload::Recent => "Trusted companies".to_string(),
    });
    Ok(render_document(&title, &fragment))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read stdin")?;
            Ok(body)
        }
    }
}

fn write_output(path: Option<&Path>, html: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
