use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::error::ExportError;
use crate::styles::ReportStyles;

/// Generate a DOCX document from a rendered report.
///
/// The `rendered` content uses a small subset:
/// - `# Heading` → DOCX Heading 1
/// - `## Heading` → DOCX Heading 2
/// - `- item` → bullet paragraph
/// - `**bold**` → bold run
/// - consecutive `|`-delimited lines → a table, first row as header
/// - `---` or `***` → page break
/// - everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    let mut lines = rendered.lines().peekable();
    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if trimmed.starts_with('|') {
            let mut rows = vec![trimmed];
            while let Some(next) = lines.peek().map(|l| l.trim()) {
                if !next.starts_with('|') {
                    break;
                }
                rows.push(next);
                lines.next();
            }
            docx = docx.add_table(build_table(&rows, styles));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2"));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1"));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if trimmed == "---" || trimmed == "***" {
            docx = docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn bullet_paragraph(text: &str, styles: &ReportStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .fonts(RunFonts::new().ascii(&styles.body_font))
        .size(styles.body_size * 2);

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_paragraph(text: &str, styles: &ReportStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

/// Split `**bold**` spans into separate runs; odd segments are bold.
fn parse_inline(text: &str, styles: &ReportStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    for (idx, segment) in text.split("**").enumerate() {
        if segment.is_empty() {
            continue;
        }
        let mut run = Run::new()
            .add_text(segment)
            .fonts(RunFonts::new().ascii(&styles.body_font))
            .size(styles.body_size * 2);
        if idx % 2 == 1 {
            run = run.bold();
        }
        runs.push(run);
    }
    runs
}

fn build_table(rows: &[&str], styles: &ReportStyles) -> Table {
    let mut table_rows = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let cells = split_row(row);
        // Markdown separator rows carry no content.
        if !cells.is_empty()
            && cells
                .iter()
                .all(|cell| !cell.is_empty() && cell.chars().all(|c| matches!(c, '-' | ':')))
        {
            continue;
        }

        let header = idx == 0;
        let cells = cells
            .into_iter()
            .map(|text| {
                let mut run = Run::new()
                    .add_text(text)
                    .fonts(RunFonts::new().ascii(&styles.body_font))
                    .size(styles.table_size * 2);
                if header {
                    run = run.bold();
                }
                TableCell::new().add_paragraph(Paragraph::new().add_run(run))
            })
            .collect();
        table_rows.push(TableRow::new(cells));
    }
    Table::new(table_rows)
}

fn split_row(row: &str) -> Vec<String> {
    row.trim()
        .trim_start_matches('|')
        .trim_end_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}
