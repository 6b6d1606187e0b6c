//! Built-in visitor page, used when the site directory has no file for a path

use axum::{
	http::{StatusCode, Uri},
	response::Html,
};

pub const DEFAULT_PAGE: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
	<meta charset=\"utf-8\">
	<title>Custom CSS</title>
</head>
<body>
	<h1>It works</h1>
	<p>Put the site pages into the dist directory. Custom styles are applied to every page.</p>
</body>
</html>
";

/// `/` answers with the built-in page, every other path with it as a 404 page
pub async fn default_page(uri: Uri) -> (StatusCode, Html<&'static str>) {
	let status = if uri.path() == "/" { StatusCode::OK } else { StatusCode::NOT_FOUND };
	(status, Html(DEFAULT_PAGE))
}

// vim: ts=4
