use reqwest::multipart::Form;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Every failure a backend call can end in, already carrying the message that
/// should be shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Your session has expired. Please login again.")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("Failed to reach the server: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::Validation(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            status => Self::Server { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Broadcast by the client whenever the session changes underneath the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the credential, it has already been discarded
    Expired,
}

#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    /// `application/x-www-form-urlencoded`, only used by the token endpoint
    Form(Vec<(String, String)>),
    /// content type including the boundary is filled in by reqwest
    Multipart(Form),
}

impl RequestBody {
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ApiError::Request(e.to_string()))
    }
}

// FastAPI style error bodies, `detail` is either a string or a list of
// validation entries
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<Value>,
    pub message: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ValidationEntry {
    pub msg: String,
    #[serde(default)]
    pub loc: Vec<Value>,
}

impl ValidationEntry {
    fn describe(&self) -> String {
        // loc looks like ["body", "email"]
        match self.loc.last().and_then(Value::as_str) {
            Some(field) if field != "body" => format!("{field}: {}", self.msg),
            _ => self.msg.clone(),
        }
    }
}

fn describe_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Array(_) => match serde_json::from_value::<Vec<ValidationEntry>>(value.clone()) {
            Ok(entries) if !entries.is_empty() => Some(
                entries
                    .iter()
                    .map(ValidationEntry::describe)
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => Some(value.to_string()),
        },
        value => Some(value.to_string()),
    }
}

/// Builds the human readable message for a failed response.
///
/// JSON bodies use `detail`, then `message`, then the whole document. Anything
/// that is not JSON is used verbatim, and an empty or unreadable body falls
/// back to the status line.
pub fn error_message(status: StatusCode, body: Option<&str>) -> String {
    let Some(body) = body.map(str::trim).filter(|body| !body.is_empty()) else {
        return format!("Error: {status}");
    };

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    if let Value::String(text) = &json {
        return text.clone();
    }

    if let Ok(ErrorResponse { detail, message }) = serde_json::from_value(json.clone()) {
        if let Some(text) = detail.as_ref().and_then(describe_value) {
            return text;
        }

        if let Some(text) = message.as_ref().and_then(describe_value) {
            return text;
        }
    }

    json.to_string()
}
