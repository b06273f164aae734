//! Screening batch runner — orchestrates the per-document pipeline.
//!
//! Flow, per document in upload order: extract → build prompt → analyze.
//! Documents are processed strictly one at a time; a failure on one document
//! is recorded on its result and the batch continues with the next.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::{extract, UploadedDocument};
use crate::llm_client::AnalysisClient;
use crate::screening::prompts::build_resume_prompt;

/// Outcome of screening a single resume, labeled by its uploaded file name.
/// Exactly one of `analysis` / `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningResult {
    pub file_name: String,
    pub analysis: Option<String>,
    pub error: Option<String>,
}

/// Runs the screening batch in upload order.
///
/// Returns `Validation` before any model call when the job description is
/// empty or no resumes were uploaded.
pub async fn run_screening_batch(
    documents: &[UploadedDocument],
    jd_text: &str,
    client: &dyn AnalysisClient,
) -> Result<Vec<ScreeningResult>, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Paste a job description before analyzing.".to_string(),
        ));
    }
    if documents.is_empty() {
        return Err(AppError::Validation(
            "Upload at least one resume (.txt or .pdf).".to_string(),
        ));
    }

    info!("Screening batch started: {} resume(s)", documents.len());

    let mut results = Vec::with_capacity(documents.len());
    for document in documents {
        let result = match screen_document(document, jd_text, client).await {
            Ok(analysis) => ScreeningResult {
                file_name: document.name.clone(),
                analysis: Some(analysis),
                error: None,
            },
            Err(e) => {
                warn!("Screening failed for '{}': {e}", document.name);
                ScreeningResult {
                    file_name: document.name.clone(),
                    analysis: None,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(result);
    }

    Ok(results)
}

async fn screen_document(
    document: &UploadedDocument,
    jd_text: &str,
    client: &dyn AnalysisClient,
) -> Result<String, AppError> {
    let resume_text = extract(document)?;
    let prompt = build_resume_prompt(&resume_text, jd_text);
    client
        .analyze(&prompt)
        .await
        .map_err(|e| AppError::Analysis(e.to_string()))
}
