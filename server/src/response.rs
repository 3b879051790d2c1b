use axum::Json;
use serde::Serialize;

pub use self::book::*;

mod book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// `{status, message?, data?}` wrapper shared by every response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: Option<&str>, data: Option<T>) -> Json<Self> {
        Json(Self {
            status: Status::Success,
            message: message.map(String::from),
            data,
        })
    }
}

impl Envelope<()> {
    pub fn fail(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        })
    }

    pub fn error(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
        })
    }
}
