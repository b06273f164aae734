//! Text extraction for uploaded documents.
//!
//! Plain text is a pass-through UTF-8 decode; PDFs are read page by page in
//! natural order and concatenated. No OCR, no layout preservation — a file
//! that fails here aborts that document's analysis only.

use std::path::Path;

use bytes::Bytes;

use crate::errors::AppError;

/// Media kind declared by the upload, taken from the browser content type
/// with a filename-extension fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Returns `None` for anything other than a `.txt` or `.pdf` upload.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Option<Self> {
        match content_type {
            Some("application/pdf") => return Some(Self::Pdf),
            Some("text/plain") => return Some(Self::PlainText),
            _ => {}
        }

        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// A single uploaded file. Alive only until its text is extracted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub kind: DocumentKind,
    pub data: Bytes,
}

/// Extracts the plain-text content of an uploaded document.
pub fn extract(document: &UploadedDocument) -> Result<String, AppError> {
    match document.kind {
        DocumentKind::PlainText => std::str::from_utf8(&document.data)
            .map(str::to_owned)
            .map_err(|e| AppError::Decode(format!("'{}' is not valid UTF-8: {e}", document.name))),
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&document.data)
            .map_err(|e| AppError::Parse(format!("'{}' is not a readable PDF: {e}", document.name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_document(name: &str, bytes: &[u8]) -> UploadedDocument {
        UploadedDocument {
            name: name.to_string(),
            kind: DocumentKind::PlainText,
            data: Bytes::copy_from_slice(bytes),
        }
    }

    #[test]
    fn test_plain_text_round_trips_exactly() {
        let content = "Jane Doe\nRust, Go, Kubernetes — 7 years of backend experience.\n";
        let document = text_document("jane.txt", content.as_bytes());
        assert_eq!(extract(&document).unwrap(), content);
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let document = text_document("broken.txt", &[0x4a, 0x61, 0xff, 0xfe]);
        let err = extract(&document).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)), "got {err:?}");
        assert!(err.to_string().contains("broken.txt"));
    }

    #[test]
    fn test_garbage_bytes_are_a_pdf_parse_error() {
        let document = UploadedDocument {
            name: "not-a-pdf.pdf".to_string(),
            kind: DocumentKind::Pdf,
            data: Bytes::from_static(b"this is not a PDF stream"),
        };
        let err = extract(&document).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_detect_prefers_content_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), "resume"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect(Some("text/plain"), "resume"),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        // Browsers commonly send octet-stream for .txt uploads
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), "resume.TXT"),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(
            DocumentKind::detect(None, "resume.pdf"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_detect_rejects_unsupported_kinds() {
        assert_eq!(DocumentKind::detect(None, "resume.docx"), None);
        assert_eq!(DocumentKind::detect(Some("image/png"), "scan.png"), None);
        assert_eq!(DocumentKind::detect(None, "resume"), None);
    }
}
