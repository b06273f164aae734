//! Axum route handlers for the Feedback Analysis view.

use axum::extract::{Multipart, State};
use axum::response::Html;
use bytes::Bytes;

use crate::errors::AppError;
use crate::feedback::runner::{read_feedback_rows, run_feedback_batch};
use crate::state::AppState;
use crate::views::{render, FeedbackTemplate};

/// GET /feedback
///
/// The upload form with an empty results area.
pub async fn handle_feedback_page() -> Result<Html<String>, AppError> {
    render(&FeedbackTemplate {
        error: None,
        results: Vec::new(),
    })
}

/// POST /feedback
///
/// Multipart field: `feedback_csv`. The CSV is parsed in full before the
/// first model call; a missing `feedback` column renders exactly one error
/// and makes no calls.
pub async fn handle_feedback_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let data = match read_feedback_submit(multipart).await {
        Ok(data) => data,
        Err(AppError::Validation(message)) => return render_error(message),
        Err(e) => return Err(e),
    };

    let rows = match read_feedback_rows(&data) {
        Ok(rows) => rows,
        Err(AppError::Validation(message)) => return render_error(message),
        Err(e) => return Err(e),
    };

    let results = run_feedback_batch(&rows, state.analysis.as_ref()).await;
    render(&FeedbackTemplate {
        error: None,
        results,
    })
}

fn render_error(message: String) -> Result<Html<String>, AppError> {
    render(&FeedbackTemplate {
        error: Some(message),
        results: Vec::new(),
    })
}

async fn read_feedback_submit(mut multipart: Multipart) -> Result<Bytes, AppError> {
    let mut csv_data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?
    {
        match field.name().unwrap_or("") {
            "feedback_csv" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                if file_name.is_empty() {
                    let _ = field.bytes().await;
                    continue;
                }
                csv_data = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("could not read '{file_name}': {e}"))
                })?);
            }
            _ => {
                let _ = field.bytes().await;
            }
        }
    }

    csv_data.ok_or_else(|| {
        AppError::Validation("Upload a CSV file with a 'feedback' column.".to_string())
    })
}
