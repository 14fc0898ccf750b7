//! vsms-export
//!
//! Report rendering for finished assessments: Tera template → printable
//! text → DOCX bytes. The PDF backend is pending library selection; the
//! DOCX artifact is the printable report meanwhile.

pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;

use jiff::Timestamp;

use vsms_core::format::format_file_date;

pub use docx::generate_docx;
pub use render::render_report;
pub use styles::ReportStyles;

/// Filename for a downloaded report:
/// `VSMS_Assessment_{Child_Name}_{YYYYMMDD}.docx`.
pub fn report_filename(child_name: &str, generated_at: Timestamp) -> String {
    let name = if child_name.trim().is_empty() {
        "Patient".to_string()
    } else {
        child_name.split_whitespace().collect::<Vec<_>>().join("_")
    };
    format!(
        "VSMS_Assessment_{}_{}.docx",
        name,
        format_file_date(generated_at)
    )
}
