use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "step": state.session.step.as_str(),
            "exportDir": state.export_dir.as_ref().map(|p| p.to_string_lossy().to_string())
        }),
    )
}

fn handle_state_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    match serde_json::to_value(&state.session) {
        Ok(snapshot) => ok(&req.id, snapshot),
        Err(e) => err(&req.id, "internal", e.to_string(), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "state.get" => Some(handle_state_get(state, req)),
        _ => None,
    }
}
