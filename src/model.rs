use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A weighted evaluation criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competence {
    pub name: String,
    pub coefficient: f64,
}

impl Competence {
    pub fn new(name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            name: name.into(),
            coefficient,
        }
    }
}

pub const DEFAULT_COMPETENCE_NAMES: [&str; 4] = [
    "Compréhension",
    "Réalisation technique",
    "Qualité des résultats",
    "Autonomie",
];

/// Built-in rubric: four competences, all weighted 1.
pub fn default_competences() -> &'static [Competence] {
    static DEFAULTS: OnceLock<Vec<Competence>> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        DEFAULT_COMPETENCE_NAMES
            .iter()
            .map(|name| Competence::new(*name, 1.0))
            .collect()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RubricChoice {
    #[default]
    Default,
    Custom,
}

impl RubricChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Custom => "custom",
        }
    }
}
