//! Endpoint helpers for the check backend.
//!
//! ERROR HANDLING
//! ==============
//! `load_history` is fail-open: any request or shape failure is reported and
//! replaced by an empty list, so the page always renders an empty state
//! rather than an error screen. The check endpoints propagate their errors;
//! only the CLI calls them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::client::{ApiClient, RequestError, RequestOptions};
use super::transport::Transport;
use super::types::{CheckAccepted, CheckDetails, CheckSubmission, HistoryEnvelope, HistoryRecord};
use crate::util::diagnostics::Diagnostics;

pub const HISTORY_ENDPOINT: &str = "/history";
pub const CHECK_ENDPOINT: &str = "/check";

fn check_endpoint(check_id: &str) -> String {
    format!("{CHECK_ENDPOINT}/{check_id}")
}

/// Records decoded from a `/history` body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedHistory {
    /// Well-formed records in server order.
    pub records: Vec<HistoryRecord>,
    /// One message per entry that failed to decode.
    pub rejected: Vec<String>,
}

/// Extract the record list from a `/history` body.
///
/// A missing or `null` `history` field yields an empty list. Entries are
/// decoded one by one: a malformed entry is reported in `rejected` and the
/// rest are kept.
///
/// # Errors
///
/// Returns the decode error when `history` is present but is not a list.
pub fn parse_history(body: Value) -> Result<ParsedHistory, serde_json::Error> {
    let envelope: HistoryEnvelope = serde_json::from_value(body)?;
    let mut parsed = ParsedHistory::default();
    for (index, entry) in envelope.history.unwrap_or_default().into_iter().enumerate() {
        match serde_json::from_value::<HistoryRecord>(entry) {
            Ok(record) => parsed.records.push(record),
            Err(e) => parsed.rejected.push(format!("history[{index}]: {e}")),
        }
    }
    Ok(parsed)
}

/// Load the check history. Never fails: errors are logged and an empty list
/// is returned.
pub async fn load_history<T: Transport, D: Diagnostics>(client: &ApiClient<T, D>) -> Vec<HistoryRecord> {
    let body = match client.request(HISTORY_ENDPOINT, RequestOptions::default()).await {
        Ok(body) => body,
        Err(e) => {
            client
                .diagnostics()
                .warn("history", &format!("failed to load history: {e}"));
            return Vec::new();
        }
    };
    match parse_history(body) {
        Ok(parsed) => {
            for message in &parsed.rejected {
                client
                    .diagnostics()
                    .warn("history", &format!("skipped malformed record: {message}"));
            }
            parsed.records
        }
        Err(e) => {
            client
                .diagnostics()
                .warn("history", &format!("unexpected history payload: {e}"));
            Vec::new()
        }
    }
}

/// Fetch one check's full result via `GET /check/{id}`.
///
/// # Errors
///
/// Returns the request error (including 404 for unknown ids) or a decode
/// error when the body is not a check.
pub async fn fetch_check<T: Transport, D: Diagnostics>(
    client: &ApiClient<T, D>,
    check_id: &str,
) -> Result<CheckDetails, RequestError> {
    let body = client.request(&check_endpoint(check_id), RequestOptions::default()).await?;
    decode(body)
}

/// Queue a new check via `POST /check`.
///
/// # Errors
///
/// Returns the request error (400 when target or checks are empty) or a
/// decode error for an unexpected body.
pub async fn submit_check<T: Transport, D: Diagnostics>(
    client: &ApiClient<T, D>,
    submission: &CheckSubmission,
) -> Result<CheckAccepted, RequestError> {
    let payload = serde_json::to_value(submission)?;
    let body = client.request(CHECK_ENDPOINT, RequestOptions::post(payload)).await?;
    decode(body)
}

/// Re-submit an existing check with the same target and check types.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn repeat_check<T: Transport, D: Diagnostics>(
    client: &ApiClient<T, D>,
    check_id: &str,
) -> Result<CheckAccepted, RequestError> {
    let original = fetch_check(client, check_id).await?;
    let submission = CheckSubmission {
        target: original.target,
        checks: original.checks,
    };
    submit_check(client, &submission).await
}

fn decode<R: DeserializeOwned>(body: Value) -> Result<R, RequestError> {
    Ok(serde_json::from_value(body)?)
}
