use serde::Serialize;

use crate::model::Competence;
use crate::store::EvaluationStore;

/// Each score step is worth 5 points, so a 1..4 scale lands on 5..20.
pub const SCORE_SCALE: f64 = 5.0;

/// 2-decimal rounding, half-up on the scaled value:
/// `Floor(100*x + 0.5) / 100`
pub fn round_off_2_decimals(x: f64) -> f64 {
    ((100.0 * x) + 0.5).floor() / 100.0
}

/// Weighted average over the active competences the student has a score for,
/// scaled to 20. `None` when nothing active has been scored.
pub fn final_grade(student: &str, active: &[Competence], store: &EvaluationStore) -> Option<f64> {
    let scores = store.scores(student)?;

    let mut total = 0.0;
    let mut coeff_sum = 0.0;
    for comp in active {
        let Some(score) = scores.get(&comp.name) else {
            continue;
        };
        total += (*score as f64) * SCORE_SCALE * comp.coefficient;
        coeff_sum += comp.coefficient;
    }

    if coeff_sum > 0.0 {
        Some(round_off_2_decimals(total / coeff_sum))
    } else {
        None
    }
}

/// Display form used on screen and in the export: two decimals, or empty.
pub fn format_grade(grade: Option<f64>) -> String {
    grade.map(|g| format!("{g:.2}")).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgress {
    pub scored: usize,
    pub total: usize,
}

impl StudentProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.scored == self.total
    }
}

pub fn student_progress(
    student: &str,
    active: &[Competence],
    store: &EvaluationStore,
) -> StudentProgress {
    let scored = active
        .iter()
        .filter(|c| store.score(student, &c.name).is_some())
        .count();
    StudentProgress {
        scored,
        total: active.len(),
    }
}
