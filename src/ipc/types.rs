use std::path::PathBuf;

use serde::Deserialize;

use crate::session::Session;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub session: Session,
    /// Where `export.csv` writes when the request names no path.
    pub export_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(export_dir: Option<PathBuf>) -> Self {
        Self {
            session: Session::new(),
            export_dir,
        }
    }
}
