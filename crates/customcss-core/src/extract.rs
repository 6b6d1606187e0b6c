//! Custom extractors for authenticated requests

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;

/// Authenticated principal, placed in request extensions by the auth middleware
#[derive(Debug, Clone)]
pub struct AuthCtx {
	pub subject: Box<str>,
	pub capabilities: Box<[Box<str>]>,
}

impl AuthCtx {
	pub fn has_capability(&self, capability: &str) -> bool {
		self.capabilities.iter().any(|c| c.as_ref() == capability)
	}
}

// Auth //
//******//
#[derive(Debug, Clone)]
pub struct Auth(pub AuthCtx);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// vim: ts=4
