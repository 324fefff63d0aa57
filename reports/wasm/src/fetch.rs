//! Backend calls. Each returns the decoded payload or the first failure.

use af2_report::types::SearchQuery;
use af2_report::{RecentResponse, ReportResponse, ViewerConfig, decode_recent, decode_report};
use gloo_net::http::{Request, Response};

use crate::error::ViewerError;

/// `POST /report` with `{"oid": ...}`.
pub async fn fetch_report(config: &ViewerConfig, query: &SearchQuery) -> Result<ReportResponse, ViewerError> {
    let response = Request::post(&config.report_endpoint)
        .header("Content-Type", "application/json")
        .body(query.to_json())?
        .send()
        .await?;
    let body = read_body(response).await?;
    Ok(decode_report(&body)?)
}

/// `GET /recent`.
pub async fn fetch_recent(config: &ViewerConfig) -> Result<RecentResponse, ViewerError> {
    let response = Request::get(&config.recent_endpoint).send().await?;
    let body = read_body(response).await?;
    Ok(decode_recent(&body)?)
}

async fn read_body(response: Response) -> Result<String, ViewerError> {
    if !response.ok() {
        return Err(ViewerError::Status(response.status()));
    }
    Ok(response.text().await?)
}
