//! Stylesheet rendering

use customcss_types::utils::escape_html;

use crate::prelude::*;

/// Comment prepended to the stylesheet when attribution is enabled
pub const ATTRIBUTION: &str = "/******* Do not edit this file *******
Simple Custom CSS
Created by John Regan
http://johnregan3.github.io/simple-custom-css
******** Do not edit this file *******/

";

/// Renders the stored record as stylesheet text.
///
/// The CSS is HTML-escaped for every delivery, including the `text/css`
/// endpoint, so both strategies serve identical bytes.
pub fn render(style: &CustomStyle) -> String {
	let css = escape_html(&style.css_text);
	if style.show_attribution {
		let mut out = String::with_capacity(ATTRIBUTION.len() + css.len());
		out.push_str(ATTRIBUTION);
		out.push_str(&css);
		out
	} else {
		css
	}
}


// vim: ts=4
