use axum::{
	handler::HandlerWithoutStateExt,
	middleware,
	routing::get,
	Router,
};
use tower_http::services::ServeDir;

use crate::prelude::*;
use crate::site;
use crate::webserver::log_request;
use customcss_core::middleware::{basic_auth, inject_head, require_capability, CAP_EDIT_THEMES};
use customcss_style::{delivery, handler, EDITOR_PATH};

fn init_admin(app: &App) -> Router<App> {
	Router::new()
		.route("/admin", get(handler::get_admin_index))
		.route(EDITOR_PATH, get(handler::get_editor).post(handler::post_editor))
		.route_layer(middleware::from_fn(require_capability(CAP_EDIT_THEMES)))
		.route_layer(middleware::from_fn_with_state(app.clone(), basic_auth))
}

fn init_site(app: &App) -> Router<App> {
	let pages = ServeDir::new(&app.opts.dist_dir).fallback(site::default_page.into_service());

	Router::new()
		.fallback_service(pages)
		.layer(middleware::from_fn_with_state(app.clone(), inject_head))
}

/// The complete service router
pub fn init(app: App) -> Router {
	let router = Router::new().merge(init_admin(&app)).merge(init_site(&app));

	// The stylesheet endpoint answers on every path, admin pages included
	let router = match app.opts.delivery {
		DeliveryStrategy::Endpoint => router
			.layer(middleware::from_fn_with_state(app.clone(), delivery::stylesheet_endpoint)),
		DeliveryStrategy::Inline => router,
	};

	router.layer(middleware::from_fn(log_request)).with_state(app)
}

// vim: ts=4
