//! Admin page handlers

use axum::{
	extract::{Query, State},
	response::{Html, Redirect},
	Form,
};
use serde::Deserialize;

use customcss_core::{hooks::HookPoint, Auth};

use crate::form::{handle_submit, Editor, EditorView};
use crate::prelude::*;
use crate::store::StyleStore;
use crate::EDITOR_PATH;

#[derive(Debug, Default, Deserialize)]
pub struct EditorQuery {
	#[serde(rename = "settings-updated")]
	pub settings_updated: Option<String>,
}

/// GET /admin/custom-css - Settings page
pub async fn get_editor(
	State(app): State<App>,
	Auth(_auth): Auth,
	Query(query): Query<EditorQuery>,
) -> ClResult<Html<String>> {
	let style = app.ext::<StyleStore>()?.load().await?;

	let view = {
		let hooks = app.hooks.read().await;
		EditorView {
			updated: query.settings_updated.as_deref().is_some_and(|v| v != "false"),
			action: EDITOR_PATH,
			form_top: hooks.render(HookPoint::FormTop, &app).await,
			textarea_bottom: hooks.render(HookPoint::TextareaBottom, &app).await,
			form_bottom: hooks.render(HookPoint::FormBottom, &app).await,
		}
	};

	let html = app.ext::<Editor>()?.render_editor(&style, &view)?;
	Ok(Html(html))
}

/// POST /admin/custom-css - Save the submitted form, then show the page again
pub async fn post_editor(
	State(app): State<App>,
	Auth(auth): Auth,
	Form(fields): Form<Vec<(String, String)>>,
) -> ClResult<Redirect> {
	let style = handle_submit(&fields);
	app.ext::<StyleStore>()?.save(&style).await?;

	info!(
		subject = %auth.subject,
		"Custom CSS updated ({} bytes, attribution {})",
		style.css_text.len(),
		if style.show_attribution { "on" } else { "off" }
	);

	Ok(Redirect::to(&format!("{}?settings-updated=true", EDITOR_PATH)))
}

/// GET /admin - The appearance section has a single page
pub async fn get_admin_index() -> Redirect {
	Redirect::to(EDITOR_PATH)
}

// vim: ts=4
