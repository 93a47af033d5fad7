use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_wizard_next(state: &mut AppState, req: &Request) -> serde_json::Value {
    match state.session.advance() {
        Ok(step) => ok(&req.id, json!({ "step": step.as_str() })),
        Err(e) => HandlerErr::from(e)
            .with_details(json!({ "step": state.session.step.as_str() }))
            .response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "wizard.next" => Some(handle_wizard_next(state, req)),
        _ => None,
    }
}
