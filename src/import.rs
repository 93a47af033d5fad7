use std::path::Path;

use crate::error::ImportError;
use crate::model::Competence;

const DEFAULT_COEFFICIENT: f64 = 1.0;

/// Reads an import file as text. Invalid UTF-8 is replaced rather than
/// rejected, and a leading byte-order mark is dropped.
pub fn read_import_file(path: &Path) -> Result<String, ImportError> {
    let bytes = std::fs::read(path).map_err(|source| ImportError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// One student name per non-blank line: the first comma field, trimmed.
/// Duplicates and empty names are kept as-is.
pub fn parse_roster(text: &str) -> Vec<String> {
    non_blank_lines(text)
        .map(|line| line.split(',').next().unwrap_or("").trim().to_string())
        .collect()
}

/// `name,coefficient` per non-blank line. Never rejects a row: a missing or
/// unusable coefficient becomes 1.
pub fn parse_competences(text: &str) -> Vec<Competence> {
    non_blank_lines(text)
        .map(|line| {
            let mut fields = line.split(',');
            let name = fields.next().unwrap_or("").trim();
            let coefficient = fields
                .next()
                .and_then(parse_leading_float)
                .unwrap_or(DEFAULT_COEFFICIENT);
            Competence::new(name, coefficient)
        })
        .collect()
}

/// Longest numeric prefix after leading whitespace, so `"2.5pts"` reads as
/// 2.5 and `" 3\r"` as 3. Non-finite values count as unparsable.
fn parse_leading_float(field: &str) -> Option<f64> {
    let s = field.trim_start();
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
