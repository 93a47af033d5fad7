use crate::export::{write_export, ExportOptions, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{opt_bool, opt_str};
use crate::ipc::types::{AppState, Request};
use serde_json::json;
use std::path::PathBuf;

/// `outPath`, then `outDir`, then the configured export directory. `None`
/// means the document is only returned inline.
fn resolve_out_path(state: &AppState, req: &Request) -> Option<PathBuf> {
    if let Some(p) = opt_str(req, "outPath") {
        return Some(PathBuf::from(p));
    }
    if let Some(dir) = opt_str(req, "outDir") {
        return Some(PathBuf::from(dir).join(EXPORT_FILE_NAME));
    }
    state.export_dir.as_ref().map(|d| d.join(EXPORT_FILE_NAME))
}

fn handle_export_csv(state: &mut AppState, req: &Request) -> serde_json::Value {
    let options = ExportOptions {
        quote_fields: opt_bool(req, "quote"),
    };
    let csv = state.session.export(options);
    let out = resolve_out_path(state, req);

    if let Some(path) = out.as_ref() {
        if let Err(e) = write_export(path, &csv) {
            return err(
                &req.id,
                "write_failed",
                format!("{e:#}"),
                Some(json!({ "path": path.to_string_lossy() })),
            );
        }
    }
    tracing::info!(rows = state.session.roster.len(), "export generated");

    ok(
        &req.id,
        json!({
            "fileName": EXPORT_FILE_NAME,
            "mimeType": EXPORT_MIME_TYPE,
            "rowCount": state.session.roster.len(),
            "csv": csv,
            "path": out.map(|p| p.to_string_lossy().to_string()),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "export.csv" => Some(handle_export_csv(state, req)),
        _ => None,
    }
}
