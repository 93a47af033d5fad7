use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "students": state.session.student_rows(),
            "selectedStudent": state.session.selected_student,
        }),
    )
}

fn handle_students_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let name = match req.params.get("name") {
        None => return HandlerErr::bad_params("missing params.name").response(&req.id),
        Some(v) if v.is_null() => None,
        Some(v) => match v.as_str() {
            Some(s) => Some(s),
            None => {
                return HandlerErr::bad_params("params.name must be a string or null")
                    .response(&req.id)
            }
        },
    };
    if let Err(e) = state.session.select_student(name) {
        return HandlerErr::from(e).response(&req.id);
    }
    ok(
        &req.id,
        json!({ "selectedStudent": state.session.selected_student }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.select" => Some(handle_students_select(state, req)),
        _ => None,
    }
}
