// Webserver implementation

use axum::{extract::Request, middleware::Next, response::Response, Router};
use tokio::net::TcpListener;
use tracing::Instrument;

use crate::prelude::*;

/// Logs every request and its outcome
pub async fn log_request(req: Request, next: Next) -> Response {
	let start = std::time::Instant::now();
	let span = info_span!("REQ", req = req.uri().path());

	async move {
		info!("REQ {} {}", req.method(), req.uri().path());
		let res = next.run(req).await;

		let status = res.status();
		if status.is_client_error() || status.is_server_error() {
			warn!("RES: {} tm:{:?}", &status, start.elapsed().as_millis());
		} else {
			info!("RES: {} tm:{:?}", &status, start.elapsed().as_millis());
		}
		res
	}
	.instrument(span)
	.await
}

pub async fn serve(app: &App, router: Router) -> ClResult<()> {
	let listener = TcpListener::bind(app.opts.listen.as_ref()).await.map_err(|err| {
		error!("FATAL: Cannot listen on {}: {}", app.opts.listen, err);
		Error::Io(err)
	})?;

	info!("Listening on HTTP {}", &app.opts.listen);
	axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
	info!("Server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		error!("Cannot listen for shutdown signal: {}", err);
		std::future::pending::<()>().await;
	}
	info!("Shutting down...");
}

// vim: ts=4
