use jiff::Timestamp;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use vsms_core::format::{format_date_time, format_dob, format_score};
use vsms_core::models::record::AssessmentRecord;
use vsms_core::models::response::ResponseValue;
use vsms_scale::catalog::{Catalog, age_level_label};

use crate::error::ExportError;

/// The clinical report in the markdown-ish subset the DOCX generator
/// consumes: headings, bold label/value bullets, `|`-delimited tables,
/// and a page-break rule before the footer.
const REPORT_TEMPLATE: &str = "\
# OCCUPATIONAL THERAPY FOUNDATION

VINELAND SOCIAL MATURITY SCALE
(Assessment Report)

## CHILD INFORMATION

- **Child Name:** {{ child_name }}
- **Date of Birth:** {{ dob }}
- **Age:** {{ age }}
- **Gender:** {{ gender }}
- **Age Level:** {{ age_level }}
- **Assessment Date & Time:** {{ assessment_date }}
- **Patient ID:** {{ patient_id }}
- **Therapist Name:** {{ therapist_name }}
- **Assessment ID:** {{ assessment_id }}

## ASSESSMENT ITEMS

| # | Skill | Category | Score | Response |
{% for item in items -%}
| {{ item.seq }} | {{ item.skill }} | {{ item.category }} | {{ item.weight }} | {{ item.response }} |
{% endfor %}
## SCORE SUMMARY

| Code | Category | Score |
{% for row in summary -%}
| {{ row.code }} | {{ row.name }} | {{ row.total }} |
{% endfor -%}
|  | Grand Total | {{ grand_total }} |

---

Generated on: {{ generated_on }}
";

#[derive(Debug, Serialize)]
struct ItemRow {
    seq: u32,
    skill: String,
    category: &'static str,
    weight: String,
    response: String,
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    code: &'static str,
    name: &'static str,
    total: String,
}

#[derive(Debug, Serialize)]
struct ReportContext {
    child_name: String,
    dob: String,
    age: String,
    gender: String,
    age_level: String,
    assessment_date: String,
    patient_id: String,
    therapist_name: String,
    assessment_id: String,
    items: Vec<ItemRow>,
    summary: Vec<SummaryRow>,
    grand_total: String,
    generated_on: String,
}

fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn build_context(
    record: &AssessmentRecord,
    catalog: &Catalog,
    generated_at: Timestamp,
) -> ReportContext {
    let items = catalog
        .all_items()
        .map(|item| ItemRow {
            seq: item.id,
            skill: item.skill.clone(),
            category: item.domain.code(),
            weight: format_score(item.weight),
            response: record
                .responses
                .get(item.id)
                .unwrap_or(ResponseValue::NotTested)
                .to_string(),
        })
        .collect();

    let summary = record
        .domain_totals
        .iter()
        .map(|(code, total)| SummaryRow {
            code: code.code(),
            name: code.name(),
            total: format_score(total),
        })
        .collect();

    ReportContext {
        child_name: or_na(&record.patient.child_name),
        dob: format_dob(&record.patient.dob),
        age: if record.patient.age.trim().is_empty() {
            "N/A".to_string()
        } else {
            format!("{} years", record.patient.age)
        },
        gender: or_na(&record.patient.gender),
        age_level: or_na(age_level_label(&record.patient.age_level)),
        assessment_date: format_date_time(record.assessment_timestamp),
        patient_id: or_na(&record.patient.patient_id),
        therapist_name: or_na(&record.patient.therapist_name),
        assessment_id: or_na(&record.assessment_id),
        items,
        summary,
        grand_total: format_score(record.grand_total),
        generated_on: format_date_time(generated_at),
    }
}

/// Render the printable report for a finished (or restored) record.
/// Deterministic: same record, catalog and generation time produce the
/// same text.
pub fn render_report(
    record: &AssessmentRecord,
    catalog: &Catalog,
    generated_at: Timestamp,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("assessment_report", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(build_context(record, catalog, generated_at))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("assessment_report", &context)?;
    debug!(chars = rendered.len(), "assessment report rendered");
    Ok(rendered)
}
