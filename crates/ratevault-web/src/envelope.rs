use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const OK_CODE: &str = "200";
pub const OK_MESSAGE: &str = "Request Processed Successfully";

pub const NOT_FOUND_CODE: &str = "404";
pub const NOT_FOUND_MESSAGE: &str = "No data available for the requested resource";

pub const INTERNAL_ERROR_CODE: &str = "500";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An error occurred. Please try again or contact your administrator";

/// Wire envelope carried by every response from the data endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub code: String,
    pub message: String,
    pub timestamp: String,
    pub resource_type: String,
    pub data: Value,
}

impl ResponseEnvelope {
    fn new(code: &str, message: &str, resource_type: &str, data: Value) -> Self {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
        Self {
            code: code.to_owned(),
            message: message.to_owned(),
            timestamp,
            resource_type: resource_type.to_owned(),
            data,
        }
    }

    pub fn ok(resource_type: &str, data: Value) -> Self {
        Self::new(OK_CODE, OK_MESSAGE, resource_type, data)
    }

    pub fn not_found(resource_type: &str, data: Value) -> Self {
        Self::new(NOT_FOUND_CODE, NOT_FOUND_MESSAGE, resource_type, data)
    }

    pub fn internal_error(resource_type: &str, data: Value) -> Self {
        Self::new(INTERNAL_ERROR_CODE, INTERNAL_ERROR_MESSAGE, resource_type, data)
    }
}
