use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::calc::{self, StudentProgress};
use crate::error::SessionError;
use crate::export::{self, ExportOptions};
use crate::import;
use crate::model::{default_competences, Competence, RubricChoice};
use crate::store::EvaluationStore;

pub const EVALUATED_LABEL: &str = "Évaluée";

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    Roster,
    Rubric,
    Evaluation,
}

impl WizardStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Rubric => "rubric",
            Self::Evaluation => "evaluation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportKind {
    Roster,
    Competences,
}

impl ImportKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roster" => Some(Self::Roster),
            "competences" => Some(Self::Competences),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTicket {
    pub kind: ImportKind,
    pub seq: u64,
}

/// Hands out increasing per-kind sequence numbers. Only the newest ticket of
/// a kind may apply its result.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSequencer {
    roster: u64,
    competences: u64,
}

impl ImportSequencer {
    fn slot(&mut self, kind: ImportKind) -> &mut u64 {
        match kind {
            ImportKind::Roster => &mut self.roster,
            ImportKind::Competences => &mut self.competences,
        }
    }

    pub fn begin(&mut self, kind: ImportKind) -> ImportTicket {
        let slot = self.slot(kind);
        *slot += 1;
        ImportTicket { kind, seq: *slot }
    }

    pub fn latest(&self, kind: ImportKind) -> u64 {
        match kind {
            ImportKind::Roster => self.roster,
            ImportKind::Competences => self.competences,
        }
    }

    pub fn is_current(&self, ticket: ImportTicket) -> bool {
        ticket.seq != 0 && ticket.seq == self.latest(ticket.kind)
    }
}

#[derive(Debug, Clone)]
pub enum ImportSource {
    Text(String),
    File(PathBuf),
}

impl ImportSource {
    pub fn text(s: impl Into<String>) -> Self {
        ImportSource::Text(s.into())
    }

    fn load(&self) -> Result<String, SessionError> {
        match self {
            ImportSource::Text(t) => Ok(t.clone()),
            ImportSource::File(p) => import::read_import_file(p).map_err(|e| {
                tracing::warn!(path = %p.display(), error = %e, "import file unreadable");
                SessionError::from(e)
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    pub name: String,
    pub grade: Option<f64>,
    pub grade_text: String,
    pub evaluated: bool,
    pub status: &'static str,
    pub scored_count: usize,
    pub competence_count: usize,
    pub complete: bool,
}

/// The whole single-user session: what the three wizard screens show and
/// every score recorded so far.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub step: WizardStep,
    pub roster: Vec<String>,
    pub roster_imported: bool,
    pub custom_competences: Vec<Competence>,
    pub rubric: RubricChoice,
    pub evaluations: EvaluationStore,
    pub selected_student: Option<String>,
    pub imports: ImportSequencer,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_competences(&self) -> &[Competence] {
        match self.rubric {
            RubricChoice::Default => default_competences(),
            RubricChoice::Custom => &self.custom_competences,
        }
    }

    pub fn begin_import(&mut self, kind: ImportKind) -> ImportTicket {
        self.imports.begin(kind)
    }

    /// Applies a finished read if `ticket` is still the newest of its kind.
    /// Returns `Ok(false)` for a superseded ticket; a read failure leaves the
    /// session untouched.
    pub fn complete_import(
        &mut self,
        ticket: ImportTicket,
        source: &ImportSource,
    ) -> Result<bool, SessionError> {
        if !self.imports.is_current(ticket) {
            tracing::warn!(
                kind = ?ticket.kind,
                seq = ticket.seq,
                latest = self.imports.latest(ticket.kind),
                "discarding superseded import"
            );
            return Ok(false);
        }
        let text = source.load()?;
        match ticket.kind {
            ImportKind::Roster => self.apply_roster(import::parse_roster(&text)),
            ImportKind::Competences => self.apply_competences(import::parse_competences(&text)),
        }
        Ok(true)
    }

    /// Begins and completes a roster import in one step.
    pub fn import_roster(&mut self, source: &ImportSource) -> Result<bool, SessionError> {
        let ticket = self.begin_import(ImportKind::Roster);
        self.complete_import(ticket, source)
    }

    pub fn import_competences(&mut self, source: &ImportSource) -> Result<bool, SessionError> {
        let ticket = self.begin_import(ImportKind::Competences);
        self.complete_import(ticket, source)
    }

    fn apply_roster(&mut self, names: Vec<String>) {
        tracing::info!(students = names.len(), "roster imported");
        self.roster = names;
        self.roster_imported = true;
        if self
            .selected_student
            .as_ref()
            .is_some_and(|sel| !self.roster.contains(sel))
        {
            self.selected_student = None;
        }
    }

    fn apply_competences(&mut self, comps: Vec<Competence>) {
        tracing::info!(competences = comps.len(), "custom competences imported");
        self.custom_competences = comps;
    }

    fn select_rubric(&mut self, choice: RubricChoice) {
        if self.rubric != choice {
            tracing::info!(rubric = choice.as_str(), "rubric switched");
        }
        self.rubric = choice;
    }

    pub fn select_default_rubric(&mut self) {
        self.select_rubric(RubricChoice::Default);
    }

    pub fn select_custom_rubric(&mut self) {
        self.select_rubric(RubricChoice::Custom);
    }

    pub fn select_student(&mut self, name: Option<&str>) -> Result<(), SessionError> {
        match name {
            Some(n) if !self.roster.iter().any(|s| s == n) => {
                Err(SessionError::UnknownStudent(n.to_string()))
            }
            _ => {
                self.selected_student = name.map(str::to_string);
                Ok(())
            }
        }
    }

    /// Records one score and returns the student's refreshed grade.
    pub fn record_score(
        &mut self,
        student: &str,
        competence: &str,
        value: i64,
    ) -> Result<Option<f64>, SessionError> {
        if !self.roster.iter().any(|s| s == student) {
            return Err(SessionError::UnknownStudent(student.to_string()));
        }
        if !self.active_competences().iter().any(|c| c.name == competence) {
            return Err(SessionError::UnknownCompetence(competence.to_string()));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(SessionError::ScoreOutOfRange(value));
        }
        self.evaluations.set_score(student, competence, value);
        tracing::debug!(student, competence, value, "score recorded");
        Ok(self.final_grade(student))
    }

    pub fn final_grade(&self, student: &str) -> Option<f64> {
        calc::final_grade(student, self.active_competences(), &self.evaluations)
    }

    pub fn progress(&self, student: &str) -> StudentProgress {
        calc::student_progress(student, self.active_competences(), &self.evaluations)
    }

    pub fn student_rows(&self) -> Vec<StudentRow> {
        self.roster
            .iter()
            .map(|name| {
                let grade = self.final_grade(name);
                let evaluated = self.evaluations.has_any_score(name);
                let progress = self.progress(name);
                StudentRow {
                    name: name.clone(),
                    grade,
                    grade_text: calc::format_grade(grade),
                    evaluated,
                    status: if evaluated { EVALUATED_LABEL } else { "" },
                    scored_count: progress.scored,
                    competence_count: progress.total,
                    complete: progress.is_complete(),
                }
            })
            .collect()
    }

    /// Moves one screen forward once that screen's prerequisite exists.
    pub fn advance(&mut self) -> Result<WizardStep, SessionError> {
        let next = match self.step {
            WizardStep::Roster if !self.roster_imported => {
                return Err(SessionError::StepBlocked {
                    step: "roster",
                    reason: "no roster imported yet",
                })
            }
            WizardStep::Roster => WizardStep::Rubric,
            WizardStep::Rubric if self.active_competences().is_empty() => {
                return Err(SessionError::StepBlocked {
                    step: "rubric",
                    reason: "active rubric has no competences",
                })
            }
            WizardStep::Rubric => WizardStep::Evaluation,
            WizardStep::Evaluation => {
                return Err(SessionError::StepBlocked {
                    step: "evaluation",
                    reason: "last step",
                })
            }
        };
        self.step = next;
        tracing::info!(step = next.as_str(), "wizard advanced");
        Ok(next)
    }

    pub fn export(&self, options: ExportOptions) -> String {
        export::export_csv(
            &self.roster,
            self.active_competences(),
            &self.evaluations,
            options,
        )
    }
}
