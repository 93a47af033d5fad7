use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::model::{default_competences, RubricChoice};
use serde_json::json;

fn handle_rubric_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let raw = match required_str(req, "rubric") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    let Some(choice) = RubricChoice::parse(raw) else {
        return HandlerErr::bad_params("params.rubric must be one of: default, custom")
            .with_details(json!({ "rubric": raw }))
            .response(&req.id);
    };
    match choice {
        RubricChoice::Default => state.session.select_default_rubric(),
        RubricChoice::Custom => state.session.select_custom_rubric(),
    }
    ok(
        &req.id,
        json!({
            "rubric": choice.as_str(),
            "competences": state.session.active_competences(),
        }),
    )
}

fn handle_competences_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "rubric": state.session.rubric.as_str(),
            "competences": state.session.active_competences(),
            "defaults": default_competences(),
            "custom": state.session.custom_competences,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "rubric.select" => Some(handle_rubric_select(state, req)),
        "competences.list" => Some(handle_competences_list(state, req)),
        _ => None,
    }
}
