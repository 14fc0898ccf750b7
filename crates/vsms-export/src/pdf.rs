use crate::error::ExportError;

/// Generate a PDF from a rendered report.
///
/// PDF output requires a rendering library (e.g. `typst`, `printpdf`, or
/// shelling out to `weasyprint`) and the selection is still pending, so
/// this returns an error for now. The DOCX path produced by
/// [`crate::docx::generate_docx`] is the printable artifact meanwhile;
/// callers that offer both should fall back to it.
pub fn generate_pdf(_rendered: &str) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Pdf(
        "PDF generation not yet implemented — library selection pending".to_string(),
    ))
}
