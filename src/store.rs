use serde::Serialize;
use std::collections::BTreeMap;

pub type StudentScores = BTreeMap<String, i64>;

/// Student name -> competence name -> score. A missing cell means "not yet
/// evaluated"; it is never read back as zero.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct EvaluationStore {
    by_student: BTreeMap<String, StudentScores>,
}

impl EvaluationStore {
    /// Upserts one cell. Range checks belong to the caller.
    pub fn set_score(&mut self, student: &str, competence: &str, value: i64) {
        self.by_student
            .entry(student.to_string())
            .or_default()
            .insert(competence.to_string(), value);
    }

    pub fn scores(&self, student: &str) -> Option<&StudentScores> {
        self.by_student.get(student)
    }

    pub fn score(&self, student: &str, competence: &str) -> Option<i64> {
        self.by_student.get(student)?.get(competence).copied()
    }

    pub fn has_any_score(&self, student: &str) -> bool {
        self.by_student
            .get(student)
            .map(|m| !m.is_empty())
            .unwrap_or(false)
    }
}
