use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform JSON envelope returned by the API routes.
/// `data` is present on success and `null` on failure.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self { status_code, message: message.into(), data: Some(data) }
    }

    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self { status_code, message: message.into(), data: None }
    }
}
