use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::{import_source, opt_str};
use crate::ipc::types::{AppState, Request};
use crate::session::{ImportKind, ImportTicket, Session};
use serde_json::json;

/// A ticket from `imports.begin`, if the request carries one. Tickets that
/// were never issued, or were issued for the other import kind, are rejected
/// rather than treated as stale.
fn requested_ticket(
    session: &Session,
    req: &Request,
    kind: ImportKind,
) -> Result<Option<ImportTicket>, HandlerErr> {
    let Some(raw) = req.params.get("ticket").filter(|v| !v.is_null()) else {
        return Ok(None);
    };
    let ticket: ImportTicket = serde_json::from_value(raw.clone()).map_err(|e| {
        HandlerErr::bad_params(format!("params.ticket must be {{kind, seq}}: {e}"))
            .with_details(json!({ "ticket": raw }))
    })?;
    if ticket.kind != kind {
        return Err(HandlerErr::bad_params("import ticket issued for another kind")
            .with_details(json!({ "ticket": raw, "expected": kind })));
    }
    let latest = session.imports.latest(kind);
    if !(1..=latest).contains(&ticket.seq) {
        return Err(HandlerErr::bad_params("unknown import ticket")
            .with_details(json!({ "ticket": raw, "latest": latest })));
    }
    Ok(Some(ticket))
}

fn handle_imports_begin(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(kind) = opt_str(req, "kind").and_then(ImportKind::parse) else {
        return HandlerErr::bad_params("params.kind must be one of: roster, competences")
            .response(&req.id);
    };
    let ticket = state.session.begin_import(kind);
    ok(&req.id, json!({ "ticket": ticket }))
}

fn run_import(state: &mut AppState, req: &Request, kind: ImportKind) -> Result<bool, HandlerErr> {
    let source = import_source(req)?;
    let applied = match requested_ticket(&state.session, req, kind)? {
        Some(ticket) => state.session.complete_import(ticket, &source)?,
        None => match kind {
            ImportKind::Roster => state.session.import_roster(&source)?,
            ImportKind::Competences => state.session.import_competences(&source)?,
        },
    };
    Ok(applied)
}

fn handle_roster_import(state: &mut AppState, req: &Request) -> serde_json::Value {
    match run_import(state, req, ImportKind::Roster) {
        Ok(applied) => ok(
            &req.id,
            json!({
                "applied": applied,
                "students": state.session.roster,
            }),
        ),
        Err(e) => e.response(&req.id),
    }
}

fn handle_competences_import(state: &mut AppState, req: &Request) -> serde_json::Value {
    match run_import(state, req, ImportKind::Competences) {
        Ok(applied) => ok(
            &req.id,
            json!({
                "applied": applied,
                "competences": state.session.custom_competences,
            }),
        ),
        Err(e) => e.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "imports.begin" => Some(handle_imports_begin(state, req)),
        "roster.import" => Some(handle_roster_import(state, req)),
        "competences.import" => Some(handle_competences_import(state, req)),
        _ => None,
    }
}
