//! Stylesheet delivery
//!
//! Two strategies, one per deployment:
//! - `Inline`: a `<style>` element is added to the head of every visitor page.
//! - `Endpoint`: pages link to `/?sccss=1`, which a middleware answers with the
//!   stylesheet itself before any page handler runs.
//!
//! Both read the store on every request and fall back to an empty stylesheet
//! when it cannot be read.

use axum::{
	extract::{Request, State},
	http::{header, Method},
	middleware::Next,
	response::{IntoResponse, Response},
};

use customcss_core::hooks::HookPoint;
use customcss_types::utils::escape_html;

use crate::prelude::*;
use crate::render::render;
use crate::store::StyleStore;

/// Reserved query parameter selecting the stylesheet endpoint
pub const SCCSS_PARAM: &str = "sccss";

const HOOK_NAME: &str = "sccss_style";

/// True when the decoded query string carries `sccss=1`
pub fn is_stylesheet_request(query: Option<&str>) -> bool {
	let Some(query) = query else {
		return false;
	};
	serde_urlencoded::from_str::<Vec<(String, String)>>(query)
		.is_ok_and(|pairs| pairs.iter().any(|(name, value)| name == SCCSS_PARAM && value == "1"))
}

/// Public URL of the stylesheet endpoint
pub fn stylesheet_url(base_url: &str) -> String {
	format!("{}/?{}=1", base_url.trim_end_matches('/'), SCCSS_PARAM)
}

async fn rendered_css(app: &App) -> String {
	match app.ext::<StyleStore>() {
		Ok(store) => render(&store.load_or_default().await),
		Err(err) => {
			error!("Style store unavailable, serving empty stylesheet: {}", err);
			String::new()
		}
	}
}

async fn inline_style(app: &App) -> ClResult<String> {
	Ok(format!("<style>{}</style>", rendered_css(app).await))
}

async fn stylesheet_link(app: &App) -> ClResult<String> {
	Ok(format!(
		"<link rel=\"stylesheet\" id=\"sccss_style-css\" href=\"{}\" type=\"text/css\" media=\"all\">",
		escape_html(&stylesheet_url(&app.opts.base_url))
	))
}

/// Registers the head output of the configured strategy
pub async fn register_hooks(app: &App) -> ClResult<()> {
	let priority = app.opts.head_priority;
	let mut hooks = app.hooks.write().await;
	match app.opts.delivery {
		DeliveryStrategy::Inline => {
			hooks.register(HookPoint::Head, HOOK_NAME, priority, |app| Box::pin(inline_style(app)));
		}
		DeliveryStrategy::Endpoint => {
			hooks.register(HookPoint::Head, HOOK_NAME, priority, |app| {
				Box::pin(stylesheet_link(app))
			});
		}
	}
	info!("Custom CSS delivery: {} (head priority {})", app.opts.delivery, priority);
	Ok(())
}

/// The complete `text/css` response of the endpoint
pub async fn stylesheet_response(app: &App) -> Response {
	([(header::CONTENT_TYPE, "text/css")], rendered_css(app).await).into_response()
}

/// Answers `GET /?sccss=1` (on any path) with the stylesheet and ends the
/// request there. Every other request continues to the page handlers.
pub async fn stylesheet_endpoint(State(app): State<App>, req: Request, next: Next) -> Response {
	let is_read = matches!(*req.method(), Method::GET | Method::HEAD);
	if !is_read || !is_stylesheet_request(req.uri().query()) {
		return next.run(req).await;
	}

	debug!("Serving custom stylesheet for {}", req.uri());
	stylesheet_response(&app).await
}


// vim: ts=4
