//! Custom middlewares

use axum::{
	body::{Body, HttpBody},
	extract::{Request, State},
	http::{header, Method, StatusCode},
	middleware::Next,
	response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::{future::Future, pin::Pin};

use crate::extract::{Auth, AuthCtx};
use crate::hooks::HookPoint;
use crate::prelude::*;

/// Capability required to manage the site appearance
pub const CAP_EDIT_THEMES: &str = "edit_themes";

/// Pages larger than this are passed through without head injection
pub const MAX_INJECT_SIZE: usize = 4 * 1024 * 1024;

pub type PermissionCheckOutput = Pin<Box<dyn Future<Output = ClResult<Response>> + Send>>;

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}
	a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Decodes `Authorization: Basic ...` into (user, password)
fn parse_basic_auth(value: &str) -> Option<(String, String)> {
	let encoded = value.strip_prefix("Basic ")?.trim();
	let decoded = STANDARD.decode(encoded).ok()?;
	let decoded = String::from_utf8(decoded).ok()?;
	let (user, password) = decoded.split_once(':')?;
	Some((user.to_string(), password.to_string()))
}

/// Authenticates the administrator with HTTP Basic credentials.
///
/// The configured admin account holds the `edit_themes` capability.
pub async fn basic_auth(State(app): State<App>, mut req: Request, next: Next) -> ClResult<Response> {
	let Some(expected_password) = app.opts.admin_password.as_deref() else {
		warn!("Admin login attempted but no admin password is configured");
		return Err(Error::Unauthorized);
	};

	let (user, password) = req
		.headers()
		.get(header::AUTHORIZATION)
		.and_then(|h| h.to_str().ok())
		.and_then(parse_basic_auth)
		.ok_or(Error::Unauthorized)?;

	let user_ok = constant_time_eq(user.as_bytes(), app.opts.admin_user.as_bytes());
	let password_ok = constant_time_eq(password.as_bytes(), expected_password.as_bytes());
	if !(user_ok && password_ok) {
		warn!(subject = %user, "Admin login failed");
		return Err(Error::Unauthorized);
	}

	req.extensions_mut().insert(Auth(AuthCtx {
		subject: user.into(),
		capabilities: Box::new([CAP_EDIT_THEMES.into()]),
	}));

	Ok(next.run(req).await)
}

/// Middleware factory rejecting principals that lack `capability`
pub fn require_capability(
	capability: &'static str,
) -> impl Fn(Auth, Request, Next) -> PermissionCheckOutput + Clone {
	move |auth, req, next| Box::pin(check_capability(auth, req, next, capability))
}

async fn check_capability(
	Auth(auth_ctx): Auth,
	req: Request,
	next: Next,
	capability: &str,
) -> ClResult<Response> {
	if !auth_ctx.has_capability(capability) {
		warn!(
			subject = %auth_ctx.subject,
			capability = capability,
			"Permission denied"
		);
		return Err(Error::PermissionDenied);
	}

	Ok(next.run(req).await)
}

fn find_head_end(html: &[u8]) -> Option<usize> {
	html.windows(7).position(|w| w.eq_ignore_ascii_case(b"</head>"))
}

/// Size of the body, from `Content-Length` or the body's own size hint
fn known_body_size(res: &Response) -> Option<u64> {
	res.headers()
		.get(header::CONTENT_LENGTH)
		.and_then(|v| v.to_str().ok())
		.and_then(|v| v.parse::<u64>().ok())
		.or_else(|| res.body().size_hint().upper())
}

fn is_plain_html(res: &Response) -> bool {
	let is_html = res
		.headers()
		.get(header::CONTENT_TYPE)
		.and_then(|v| v.to_str().ok())
		.is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("text/html"));
	let too_large = known_body_size(res).is_some_and(|len| len > MAX_INJECT_SIZE as u64)
		|| res.body().size_hint().lower() > MAX_INJECT_SIZE as u64;

	res.status() == StatusCode::OK
		&& is_html
		&& !too_large
		&& !res.headers().contains_key(header::CONTENT_RANGE)
		&& !res.headers().contains_key(header::CONTENT_ENCODING)
}

/// Inserts the output of the `Head` hooks right before `</head>` of HTML pages.
///
/// Anything that is not a complete, uncompressed HTML document is passed through.
/// While `Head` hooks exist, pages are always served whole and fresh: their
/// output changes independently of the underlying file.
pub async fn inject_head(State(app): State<App>, mut req: Request, next: Next) -> ClResult<Response> {
	let is_head_request = req.method() == Method::HEAD;
	let has_hooks = !app.hooks.read().await.list(HookPoint::Head).is_empty();
	if has_hooks {
		let headers = req.headers_mut();
		headers.remove(header::IF_MODIFIED_SINCE);
		headers.remove(header::IF_NONE_MATCH);
		headers.remove(header::IF_RANGE);
		headers.remove(header::RANGE);
	}

	let mut res = next.run(req).await;
	if !has_hooks || !is_plain_html(&res) {
		return Ok(res);
	}

	res.headers_mut().remove(header::LAST_MODIFIED);
	res.headers_mut().remove(header::ETAG);
	if is_head_request {
		res.headers_mut().remove(header::CONTENT_LENGTH);
		return Ok(res);
	}

	let fragment = app.hooks.read().await.render(HookPoint::Head, &app).await;
	if fragment.is_empty() {
		return Ok(res);
	}

	let (mut parts, body) = res.into_parts();
	// Size was checked above; only bodies without any size information get here
	let html = axum::body::to_bytes(body, MAX_INJECT_SIZE).await.map_err(|err| {
		warn!("Cannot buffer page for head injection: {}", err);
		Error::Internal("page too large".into())
	})?;

	let Some(pos) = find_head_end(&html) else {
		return Ok(Response::from_parts(parts, Body::from(html)));
	};

	let mut page = Vec::with_capacity(html.len() + fragment.len() + 1);
	page.extend_from_slice(&html[..pos]);
	page.extend_from_slice(fragment.as_bytes());
	page.push(b'\n');
	page.extend_from_slice(&html[pos..]);

	parts.headers.remove(header::CONTENT_LENGTH);
	Ok(Response::from_parts(parts, Body::from(page)))
}


// vim: ts=4
