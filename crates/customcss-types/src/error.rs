//! Error type shared by all Custom CSS crates

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	/// Missing or invalid credentials (answered with a Basic auth challenge)
	Unauthorized,
	/// Storage layer failure
	DbError,
	ValidationError(String),
	ConfigError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-NOT-FOUND",
			Error::PermissionDenied => "E-PERMISSION-DENIED",
			Error::Unauthorized => "E-UNAUTHORIZED",
			Error::DbError => "E-DB",
			Error::ValidationError(_) => "E-VALIDATION",
			Error::ConfigError(_) => "E-CONFIG",
			Error::Internal(_) | Error::Io(_) => "E-INTERNAL",
		}
	}

	fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::DbError | Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		tracing::warn!("JSON: {}", err);
		Self::DbError
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Unauthorized => write!(f, "authentication required"),
			Error::DbError => write!(f, "storage error"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();
		// Internal details stay in the log
		let message = if status.is_server_error() {
			tracing::error!("{}", self);
			"Internal server error".to_string()
		} else {
			self.to_string()
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});

		let mut response = (status, Json(body)).into_response();
		if let Error::Unauthorized = self {
			response.headers_mut().insert(
				header::WWW_AUTHENTICATE,
				HeaderValue::from_static("Basic realm=\"Custom CSS\", charset=\"UTF-8\""),
			);
		}
		response
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unauthorized_has_challenge() {
		let response = Error::Unauthorized.into_response();
		assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
		let challenge = response.headers().get(header::WWW_AUTHENTICATE).unwrap();
		assert!(challenge.to_str().unwrap().starts_with("Basic realm="));
	}

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::NotFound.into_response().status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::PermissionDenied.into_response().status(), StatusCode::FORBIDDEN);
		assert_eq!(Error::DbError.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			Error::ValidationError("bad".into()).into_response().status(),
			StatusCode::BAD_REQUEST
		);
	}
}

// vim: ts=4
