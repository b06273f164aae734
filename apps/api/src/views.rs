//! Askama templates for the two analysis views.
//!
//! Each view template carries the upload form plus the (possibly empty)
//! results area, so submits re-render the same page with results filled in.

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;
use crate::feedback::runner::FeedbackResult;
use crate::screening::runner::ScreeningResult;

/// "Resume Screening" view.
#[derive(Template)]
#[template(path = "screening.html")]
pub struct ScreeningTemplate {
    pub error: Option<String>,
    pub results: Vec<ScreeningResult>,
}

/// "Feedback Analysis" view.
#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackTemplate {
    pub error: Option<String>,
    pub results: Vec<FeedbackResult>,
}

/// Renders a template into an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    let body = template.render().map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screening_results_render_in_order_labeled_by_file_name() {
        let template = ScreeningTemplate {
            error: None,
            results: vec![
                ScreeningResult {
                    file_name: "alice.pdf".to_string(),
                    analysis: Some("8/10 — strong match".to_string()),
                    error: None,
                },
                ScreeningResult {
                    file_name: "bob.txt".to_string(),
                    analysis: Some("4/10 — missing backend depth".to_string()),
                    error: None,
                },
            ],
        };
        let html = template.render().unwrap();
        let alice = html.find("Result for alice.pdf").unwrap();
        let bob = html.find("Result for bob.txt").unwrap();
        assert!(alice < bob);
        assert!(html.contains("8/10 — strong match"));
    }

    #[test]
    fn test_feedback_rows_render_with_one_based_labels() {
        let template = FeedbackTemplate {
            error: None,
            results: vec![
                FeedbackResult {
                    row: 1,
                    analysis: Some("No attrition risk".to_string()),
                    error: None,
                },
                FeedbackResult {
                    row: 2,
                    analysis: None,
                    error: Some("Analysis error: quota exceeded".to_string()),
                },
            ],
        };
        let html = template.render().unwrap();
        assert!(html.contains("Feedback 1"));
        assert!(html.contains("Feedback 2"));
        assert!(html.contains("Analysis error: quota exceeded"));
    }

    #[test]
    fn test_validation_message_is_rendered() {
        let template = FeedbackTemplate {
            error: Some("CSV must contain a 'feedback' column.".to_string()),
            results: Vec::new(),
        };
        let html = template.render().unwrap();
        assert!(html.contains("CSV must contain a &#x27;feedback&#x27; column."));
    }

    #[test]
    fn test_model_output_is_html_escaped() {
        let template = ScreeningTemplate {
            error: None,
            results: vec![ScreeningResult {
                file_name: "x.txt".to_string(),
                analysis: Some("<script>alert(1)</script>".to_string()),
                error: None,
            }],
        };
        let html = template.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
