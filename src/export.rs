use anyhow::Context;
use std::path::Path;

use crate::calc::{final_grade, format_grade};
use crate::model::Competence;
use crate::store::EvaluationStore;

pub const EXPORT_FILE_NAME: &str = "evaluations.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const NAME_HEADER: &str = "NOM";
const GRADE_HEADER: &str = "Note";

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Quote fields holding `,`, `"` or line breaks. Off by default: the
    /// classic layout writes names verbatim.
    pub quote_fields: bool,
}

fn csv_quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// `NOM,Note,Note <comp>...` then one row per student, every row
/// newline-terminated. An empty roster yields the header alone.
pub fn export_csv(
    students: &[String],
    active: &[Competence],
    store: &EvaluationStore,
    options: ExportOptions,
) -> String {
    let field = |s: &str| {
        if options.quote_fields {
            csv_quote(s)
        } else {
            s.to_string()
        }
    };

    let mut csv = format!("{NAME_HEADER},{GRADE_HEADER}");
    for comp in active {
        csv.push(',');
        csv.push_str(&field(&format!("{GRADE_HEADER} {}", comp.name)));
    }
    csv.push('\n');

    for student in students {
        csv.push_str(&field(student));
        csv.push(',');
        csv.push_str(&format_grade(final_grade(student, active, store)));
        for comp in active {
            csv.push(',');
            if let Some(v) = store.score(student, &comp.name) {
                csv.push_str(&v.to_string());
            }
        }
        csv.push('\n');
    }
    csv
}

pub fn write_export(path: &Path, csv: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create export directory {}", parent.display()))?;
    }
    std::fs::write(path, csv).with_context(|| format!("write export {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = csv.len(), "export written");
    Ok(())
}
