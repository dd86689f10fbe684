//! Upload ingestion — turns an uploaded resume file into plain text for
//! the analysis core. PDFs go through `pdf-extract`; anything else is
//! treated as UTF-8 text.

use bytes::Bytes;

use crate::errors::AppError;

pub fn extract_resume_text(file_name: &str, data: &Bytes) -> Result<String, AppError> {
    if file_name.to_lowercase().ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Validation(format!("could not extract text from PDF: {e}")))
    } else {
        String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Validation("uploaded file is not valid UTF-8 text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let data = Bytes::from_static(b"education and skills");
        let text = extract_resume_text("resume.txt", &data).unwrap();
        assert_eq!(text, "education and skills");
    }

    #[test]
    fn test_pdf_extension_is_case_insensitive() {
        // Garbage bytes under a .PDF name must hit the PDF path and fail
        // with a validation error, not pass through as text.
        let data = Bytes::from_static(b"not a pdf");
        assert!(extract_resume_text("resume.PDF", &data).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let data = Bytes::from_static(&[0xff, 0xfe, 0xfd]);
        assert!(extract_resume_text("resume.txt", &data).is_err());
    }
}
