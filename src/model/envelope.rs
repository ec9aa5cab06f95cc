use serde::{Deserialize, Serialize};

/// The only round value the API ever reports
pub const LATEST_ROUND: &str = "latest";

pub const UPSTREAM_ERROR_MESSAGE: &str = "Error in response from source";
pub const MALFORMED_MARKUP_MESSAGE: &str = "Unexpected markup from source";
pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const BAD_REQUEST_MESSAGE: &str = "Bad request";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// `{ "result": { "round": "latest", "item": [...] } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: ResultBody<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBody<T> {
    pub round: String,
    pub item: Vec<T>,
}

/// `{ "Error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "Error")]
    pub error: String,
}

/// Wraps records in the success envelope without looking at them
pub fn package<T>(items: Vec<T>) -> ResultEnvelope<T> {
    ResultEnvelope {
        result: ResultBody {
            round: LATEST_ROUND.to_string(),
            item: items,
        },
    }
}

pub fn package_error(message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: message.to_string(),
    }
}
