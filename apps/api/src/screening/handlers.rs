//! Axum route handlers for the Resume Screening view.

use axum::extract::{Multipart, State};
use axum::response::Html;

use crate::errors::AppError;
use crate::extract::{DocumentKind, UploadedDocument};
use crate::screening::runner::run_screening_batch;
use crate::state::AppState;
use crate::views::{render, ScreeningTemplate};

/// GET /screening
///
/// The upload form with an empty results area.
pub async fn handle_screening_page() -> Result<Html<String>, AppError> {
    render(&ScreeningTemplate {
        error: None,
        results: Vec::new(),
    })
}

/// POST /screening
///
/// Multipart fields: `job_description` (text), `resumes` (one or more files).
/// Validation failures are rendered inside the page; anything unexpected
/// surfaces as a JSON error response.
pub async fn handle_screening_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let submit = match read_screening_submit(multipart).await {
        Ok(submit) => submit,
        Err(AppError::Validation(message)) => return render_error(message),
        Err(e) => return Err(e),
    };

    match run_screening_batch(&submit.documents, &submit.jd_text, state.analysis.as_ref()).await {
        Ok(results) => render(&ScreeningTemplate {
            error: None,
            results,
        }),
        Err(AppError::Validation(message)) => render_error(message),
        Err(e) => Err(e),
    }
}

fn render_error(message: String) -> Result<Html<String>, AppError> {
    render(&ScreeningTemplate {
        error: Some(message),
        results: Vec::new(),
    })
}

struct ScreeningSubmit {
    jd_text: String,
    documents: Vec<UploadedDocument>,
}

async fn read_screening_submit(mut multipart: Multipart) -> Result<ScreeningSubmit, AppError> {
    let mut jd_text = String::new();
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?
    {
        match field.name().unwrap_or("") {
            "job_description" => {
                jd_text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("could not read job description: {e}"))
                })?;
            }
            "resumes" => {
                // A file input with nothing selected still submits one empty part
                let file_name = field.file_name().unwrap_or("").to_string();
                if file_name.is_empty() {
                    let _ = field.bytes().await;
                    continue;
                }
                let content_type = field.content_type().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read '{file_name}': {e}")))?;
                let kind =
                    DocumentKind::detect(content_type.as_deref(), &file_name).ok_or_else(|| {
                        AppError::Validation(format!(
                            "'{file_name}': only .txt and .pdf resumes are supported"
                        ))
                    })?;
                documents.push(UploadedDocument {
                    name: file_name,
                    kind,
                    data,
                });
            }
            _ => {
                let _ = field.bytes().await;
            }
        }
    }

    Ok(ScreeningSubmit { jd_text, documents })
}
