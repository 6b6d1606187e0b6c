//! Settings form: editor page rendering and submission decoding

use handlebars::Handlebars;
use serde_json::json;

use customcss_types::utils::escape_html;

use crate::prelude::*;

/// Form field carrying the CSS text
pub const CONTENT_FIELD: &str = "sccss_settings[sccss-content]";
/// Checkbox field; browsers omit it entirely when unchecked
pub const ATTRIBUTION_FIELD: &str = "sccss_settings[show-credits]";

pub const HELP_URL: &str = "https://github.com/johnregan3/simple-custom-css/wiki";

const EDITOR_TEMPLATE: &str = "editor";

/// Builds the record from submitted `application/x-www-form-urlencoded` pairs.
///
/// A missing CSS field means empty CSS, a missing checkbox means `false`.
/// When a field repeats, the last occurrence wins.
pub fn handle_submit(fields: &[(String, String)]) -> CustomStyle {
	let css_text = fields
		.iter()
		.rev()
		.find(|(name, _)| name == CONTENT_FIELD)
		.map(|(_, value)| value.clone())
		.unwrap_or_default();
	let show_attribution = fields.iter().any(|(name, _)| name == ATTRIBUTION_FIELD);

	CustomStyle { css_text, show_attribution }
}

/// Per-request state of the editor page
#[derive(Debug, Default)]
pub struct EditorView<'a> {
	/// Show the one-time "updated" notice
	pub updated: bool,
	pub action: &'a str,
	pub form_top: String,
	pub textarea_bottom: String,
	pub form_bottom: String,
}

/// Editor page renderer
///
/// Uses the service-wide HTML escaping for every `{{value}}`, so the textarea
/// content is escaped exactly like the stylesheet output.
pub struct Editor {
	handlebars: Handlebars<'static>,
}

impl Editor {
	pub fn new() -> ClResult<Self> {
		let mut handlebars = Handlebars::new();
		handlebars.set_strict_mode(true);
		handlebars.register_escape_fn(escape_html);
		handlebars
			.register_template_string(EDITOR_TEMPLATE, include_str!("../templates/editor.html.hbs"))
			.map_err(|e| Error::ConfigError(format!("Invalid editor template: {}", e)))?;

		Ok(Self { handlebars })
	}

	pub fn render_editor(&self, style: &CustomStyle, view: &EditorView<'_>) -> ClResult<String> {
		let data = json!({
			"updated": view.updated,
			"action": view.action,
			"help_url": HELP_URL,
			"content_field": CONTENT_FIELD,
			"attribution_field": ATTRIBUTION_FIELD,
			"css_text": style.css_text,
			"show_attribution": style.show_attribution,
			"form_top": view.form_top,
			"textarea_bottom": view.textarea_bottom,
			"form_bottom": view.form_bottom,
		});

		self.handlebars.render(EDITOR_TEMPLATE, &data).map_err(|e| {
			warn!("Editor template render failed: {}", e);
			Error::Internal(format!("Template render failed: {}", e))
		})
	}
}

impl std::fmt::Debug for Editor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Editor").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn decode(body: &str) -> Vec<(String, String)> {
		serde_urlencoded::from_str(body).unwrap()
	}

	#[test]
	fn test_submit_checkbox_absent() {
		let fields = decode("sccss_settings%5Bsccss-content%5D=body+%7B+color%3A+red%3B+%7D&submit=Update");
		assert_eq!(handle_submit(&fields), CustomStyle::new("body { color: red; }", false));
	}

	#[test]
	fn test_submit_checkbox_present() {
		let fields =
			decode("sccss_settings%5Bsccss-content%5D=p+%7B%7D&sccss_settings%5Bshow-credits%5D=1");
		assert_eq!(handle_submit(&fields), CustomStyle::new("p {}", true));

		// Any value counts, the field being sent is what matters
		let fields = decode("sccss_settings%5Bshow-credits%5D=");
		assert!(handle_submit(&fields).show_attribution);
	}

	#[test]
	fn test_submit_without_fields() {
		assert_eq!(handle_submit(&[]), CustomStyle::default());
		assert_eq!(handle_submit(&decode("unrelated=1")), CustomStyle::default());
	}

	#[test]
	fn test_submit_keeps_text_verbatim() {
		let css = "</style><script>alert(1)</script>\r\n& { }";
		let fields = vec![(CONTENT_FIELD.to_string(), css.to_string())];
		assert_eq!(handle_submit(&fields).css_text, css);
	}

	#[test]
	fn test_submit_last_value_wins() {
		let fields = vec![
			(CONTENT_FIELD.to_string(), "a {}".to_string()),
			(CONTENT_FIELD.to_string(), "b {}".to_string()),
		];
		assert_eq!(handle_submit(&fields).css_text, "b {}");
	}

	#[test]
	fn test_editor_escapes_textarea() {
		let editor = Editor::new().unwrap();
		let style = CustomStyle::new("a::before { content: \"<b>\"; }</textarea>", false);
		let html = editor
			.render_editor(&style, &EditorView { action: "/admin/custom-css", ..Default::default() })
			.unwrap();

		assert!(html.contains("a::before { content: &quot;&lt;b&gt;&quot;; }&lt;/textarea&gt;</textarea>"));
		assert!(!html.contains("checked=\"checked\""));
		assert!(!html.contains("updated successfully"));
		assert!(html.contains("action=\"/admin/custom-css\""));
	}

	#[test]
	fn test_editor_checkbox_and_notice() {
		let editor = Editor::new().unwrap();
		let html = editor
			.render_editor(
				&CustomStyle::new("", true),
				&EditorView { updated: true, action: "/admin/custom-css", ..Default::default() },
			)
			.unwrap();

		assert!(html.contains("checked=\"checked\""));
		assert!(html.contains("Custom CSS updated successfully."));
		assert!(html.contains("name=\"sccss_settings[sccss-content]\""));
	}

	#[test]
	fn test_editor_fragments_are_raw() {
		let editor = Editor::new().unwrap();
		let html = editor
			.render_editor(
				&CustomStyle::default(),
				&EditorView {
					action: "/admin/custom-css",
					form_top: "<p id=\"top\">top</p>".into(),
					textarea_bottom: "<p id=\"mid\">mid</p>".into(),
					form_bottom: "<p id=\"bottom\">bottom</p>".into(),
					..Default::default()
				},
			)
			.unwrap();

		let top = html.find("<p id=\"top\">").unwrap();
		let textarea = html.find("<textarea").unwrap();
		let mid = html.find("<p id=\"mid\">").unwrap();
		let bottom = html.find("<p id=\"bottom\">").unwrap();
		assert!(top < textarea && textarea < mid && mid < bottom);
	}
}

// vim: ts=4
