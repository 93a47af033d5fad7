use crate::calc::format_grade;
use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::{required_i64, required_str};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn set_score(state: &mut AppState, req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let student = required_str(req, "student")?;
    let competence = required_str(req, "competence")?;
    let value = required_i64(req, "value")?;

    let grade = state.session.record_score(student, competence, value)?;
    Ok(json!({
        "student": student,
        "competence": competence,
        "value": value,
        "grade": grade,
        "gradeText": format_grade(grade),
    }))
}

fn handle_evaluations_set(state: &mut AppState, req: &Request) -> serde_json::Value {
    match set_score(state, req) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn handle_evaluations_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student = match required_str(req, "student") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    if !state.session.roster.iter().any(|s| s == student) {
        return HandlerErr {
            code: "not_found",
            message: "student not on roster".to_string(),
            details: Some(json!({ "student": student })),
        }
        .response(&req.id);
    }

    let session = &state.session;
    let scores: Vec<serde_json::Value> = session
        .active_competences()
        .iter()
        .map(|c| {
            json!({
                "competence": c.name,
                "coefficient": c.coefficient,
                "value": session.evaluations.score(student, &c.name),
            })
        })
        .collect();
    let grade = session.final_grade(student);

    ok(
        &req.id,
        json!({
            "student": student,
            "scores": scores,
            "grade": grade,
            "gradeText": format_grade(grade),
            "evaluated": session.evaluations.has_any_score(student),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "evaluations.set" => Some(handle_evaluations_set(state, req)),
        "evaluations.get" => Some(handle_evaluations_get(state, req)),
        _ => None,
    }
}
