use std::path::PathBuf;

use serde_json::json;

use crate::ipc::error::HandlerErr;
use crate::ipc::types::Request;
use crate::session::ImportSource;

pub fn opt_str<'a>(req: &'a Request, key: &str) -> Option<&'a str> {
    req.params.get(key).and_then(|v| v.as_str())
}

pub fn required_str<'a>(req: &'a Request, key: &str) -> Result<&'a str, HandlerErr> {
    opt_str(req, key).ok_or_else(|| HandlerErr::bad_params(format!("missing params.{key}")))
}

pub fn required_i64(req: &Request, key: &str) -> Result<i64, HandlerErr> {
    let Some(v) = req.params.get(key) else {
        return Err(HandlerErr::bad_params(format!("missing params.{key}")));
    };
    v.as_i64().ok_or_else(|| {
        HandlerErr::bad_params(format!("params.{key} must be an integer"))
            .with_details(json!({ "param": key, "value": v }))
    })
}

pub fn opt_bool(req: &Request, key: &str) -> bool {
    req.params
        .get(key)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// `params.text` wins over `params.path`; one of the two is required.
pub fn import_source(req: &Request) -> Result<ImportSource, HandlerErr> {
    if let Some(text) = opt_str(req, "text") {
        return Ok(ImportSource::text(text));
    }
    if let Some(path) = opt_str(req, "path") {
        return Ok(ImportSource::File(PathBuf::from(path)));
    }
    Err(HandlerErr::bad_params("missing params.path or params.text"))
}
