//! Feedback batch runner — iterates CSV rows through the model in file order.
//!
//! The whole CSV is parsed before the first model call, so a malformed file
//! or a missing `feedback` column is reported without spending any quota.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::feedback::prompts::build_feedback_prompt;
use crate::llm_client::AnalysisClient;

/// The required CSV column, matched case-sensitively.
pub const FEEDBACK_COLUMN: &str = "feedback";

/// Outcome of analyzing a single feedback row.
/// Exactly one of `analysis` / `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResult {
    /// 1-based position of the row in the uploaded file.
    pub row: usize,
    pub analysis: Option<String>,
    pub error: Option<String>,
}

/// Parses the uploaded CSV and returns the `feedback` column values in file
/// order. A missing column is a `Validation` error; an unreadable file is a
/// `Parse` error. Other columns are ignored.
pub fn read_feedback_rows(data: &[u8]) -> Result<Vec<String>, AppError> {
    let mut reader = csv::Reader::from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| AppError::Parse(format!("could not read CSV headers: {e}")))?;
    let column = headers
        .iter()
        .position(|h| h == FEEDBACK_COLUMN)
        .ok_or_else(|| {
            AppError::Validation(format!("CSV must contain a '{FEEDBACK_COLUMN}' column."))
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Parse(format!("could not read CSV row: {e}")))?;
        rows.push(record.get(column).unwrap_or("").to_string());
    }
    Ok(rows)
}

/// Analyzes every feedback row strictly in file order. A model failure on one
/// row is recorded on that row's result and the batch continues.
pub async fn run_feedback_batch(
    rows: &[String],
    client: &dyn AnalysisClient,
) -> Vec<FeedbackResult> {
    info!("Feedback batch started: {} row(s)", rows.len());

    let mut results = Vec::with_capacity(rows.len());
    for (index, feedback) in rows.iter().enumerate() {
        let row = index + 1;
        let prompt = build_feedback_prompt(feedback);
        let outcome = client
            .analyze(&prompt)
            .await
            .map_err(|e| AppError::Analysis(e.to_string()));
        let result = match outcome {
            Ok(analysis) => FeedbackResult {
                row,
                analysis: Some(analysis),
                error: None,
            },
            Err(e) => {
                warn!("Feedback analysis failed for row {row}: {e}");
                FeedbackResult {
                    row,
                    analysis: None,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(result);
    }
    results
}
