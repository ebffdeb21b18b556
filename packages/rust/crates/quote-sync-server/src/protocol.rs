//! Newline-delimited JSON request handling.
//!
//! Every input line is one `{id, method, params}` envelope. Requests that
//! carry an `id` get exactly one `{id, result}` line back; notifications
//! without an `id` are answered only when the envelope itself is malformed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quote_sync::{EditRecord, RawEdit, Session};

/// Substitute the other delimiter of each record's literal.
pub const METHOD_CORRECT: &str = "$/correct-another-quotation";
/// Collapse the empty literal of each record.
pub const METHOD_DELETE: &str = "$/delete-another-quotation";
/// Track a newly opened document.
pub const METHOD_DID_OPEN: &str = "textDocument/didOpen";
/// Process a change batch.
pub const METHOD_DID_CHANGE: &str = "textDocument/didChange";
/// Forget a document.
pub const METHOD_DID_CLOSE: &str = "textDocument/didClose";
/// Switch the active document.
pub const METHOD_ACTIVATE: &str = "$/activate";
/// Reverse the last correction.
pub const METHOD_UNDO: &str = "$/undo";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

/// Incoming envelope.
#[derive(Debug, Deserialize)]
pub struct Request {
    /// Correlation id, absent for notifications
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

/// Outgoing envelope.
#[derive(Debug, Serialize)]
pub struct Response {
    /// Id of the request being answered
    pub id: Option<Value>,
    /// Method result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Envelope error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

/// Error returned for malformed envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    /// JSON-RPC style error code
    pub code: i64,
    /// Human readable description
    pub message: String,
}

impl ResponseError {
    fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidOpenParams {
    uri: String,
    language_id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct DidChangeParams {
    uri: String,
    #[serde(default)]
    changes: Vec<RawEdit>,
    text: String,
}

#[derive(Debug, Deserialize)]
struct UriParams {
    uri: String,
}

fn params<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, ResponseError> {
    serde_json::from_value(value).map_err(|e| ResponseError::new(INVALID_PARAMS, e.to_string()))
}

fn to_value(value: impl Serialize) -> Result<Value, ResponseError> {
    serde_json::to_value(value).map_err(|e| ResponseError::new(INVALID_PARAMS, e.to_string()))
}

/// Run one request against the session.
pub fn dispatch_request(session: &mut Session, request: Request) -> Result<Value, ResponseError> {
    let Request { method, params: raw, .. } = request;
    match method.as_str() {
        METHOD_CORRECT => {
            let records: Vec<EditRecord> = params(raw)?;
            to_value(session.correct(&records))
        }
        METHOD_DELETE => {
            let records: Vec<EditRecord> = params(raw)?;
            to_value(session.delete_pair(&records))
        }
        METHOD_DID_OPEN => {
            let p: DidOpenParams = params(raw)?;
            session.open_document(&p.uri, &p.language_id, p.text);
            Ok(Value::Null)
        }
        METHOD_DID_CHANGE => {
            let p: DidChangeParams = params(raw)?;
            to_value(session.handle_change(&p.uri, &p.changes, p.text))
        }
        METHOD_DID_CLOSE => {
            let p: UriParams = params(raw)?;
            session.close_document(&p.uri);
            Ok(Value::Null)
        }
        METHOD_ACTIVATE => {
            let p: UriParams = params(raw)?;
            Ok(Value::Bool(session.activate(&p.uri)))
        }
        METHOD_UNDO => {
            let p: UriParams = params(raw)?;
            to_value(session.handle_undo(&p.uri))
        }
        other => Err(ResponseError::new(
            METHOD_NOT_FOUND,
            format!("unknown method: {other}"),
        )),
    }
}

/// Handle one input line; returns the line to write back, if any.
pub fn handle_message(session: &mut Session, line: &str) -> Option<String> {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            let id = request.id.clone();
            let method = request.method.clone();
            match dispatch_request(session, request) {
                Ok(_) if id.is_none() => return None,
                Ok(result) => Response {
                    id,
                    result: Some(result),
                    error: None,
                },
                Err(error) => {
                    tracing::warn!(method = %method, error = %error.message, "rejected request");
                    Response {
                        id,
                        result: None,
                        error: Some(error),
                    }
                }
            }
        }
        Err(error) => {
            tracing::warn!(error = %error, "malformed request line");
            Response {
                id: None,
                result: None,
                error: Some(ResponseError::new(PARSE_ERROR, error.to_string())),
            }
        }
    };

    match serde_json::to_string(&response) {
        Ok(line) => Some(line),
        Err(error) => {
            tracing::error!(error = %error, "failed to serialize response");
            None
        }
    }
}
