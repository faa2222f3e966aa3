//! Response Envelope
//!
//! Every JSON response carries a top-level `success` flag. Failures are
//! rendered by [`AppError`](crate::error::app_error::AppError); successes
//! wrap their payload in [`Success`], whose fields are flattened next to
//! the flag:
//!
//! ```rust
//! use kernel::response::Success;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Issued {
//!     token: String,
//! }
//!
//! let json = serde_json::to_value(Success::new(Issued { token: "t".into() })).unwrap();
//! assert_eq!(json, serde_json::json!({ "success": true, "token": "t" }));
//! ```

use serde::Serialize;

/// Successful response: `{ "success": true, ...payload }`
#[derive(Debug, Clone, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    payload: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Success<T> {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
