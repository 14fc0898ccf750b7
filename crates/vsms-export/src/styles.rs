/// Fonts and sizes for the generated report. Point sizes; the DOCX
/// layer converts to half-points where OOXML requires it.
#[derive(Debug, Clone)]
pub struct ReportStyles {
    pub body_font: String,
    pub body_size: usize,
    pub table_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            body_size: 9,
            table_size: 8,
            heading1_size: 14,
            heading2_size: 10,
        }
    }
}
