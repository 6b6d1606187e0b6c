//! Custom CSS server
//!
//! Usage: `customcss [serve|uninstall]`. Configuration comes from the
//! environment, see `config.rs`.

mod config;

use std::process::ExitCode;
use std::sync::Arc;

use customcss::error::{ClResult, Error};
use customcss::style::StyleStore;
use customcss::AppBuilder;
use customcss_settings_adapter_sqlite::SettingsAdapterSqlite;
use tracing::{error, info};

use crate::config::Config;

enum Command {
	Serve,
	Uninstall,
}

fn parse_command(arg: Option<&str>) -> ClResult<Command> {
	match arg {
		None | Some("serve") => Ok(Command::Serve),
		Some("uninstall") => Ok(Command::Uninstall),
		Some(other) => Err(Error::ConfigError(format!(
			"Unknown command '{}' (usage: customcss [serve|uninstall])",
			other
		))),
	}
}

async fn serve(mut builder: AppBuilder, config: Config) -> ClResult<()> {
	let settings_adapter = Arc::new(SettingsAdapterSqlite::new(&config.db_dir).await?);

	builder
		.listen(config.listen)
		.dist_dir(config.dist_dir)
		.base_url(config.base_url)
		.delivery(config.delivery)
		.head_priority(config.head_priority)
		.admin_user(config.admin_user)
		.settings_adapter(settings_adapter);
	if let Some(password) = config.admin_password {
		builder.admin_password(password);
	}

	builder.run().await
}

async fn uninstall(config: &Config) -> ClResult<()> {
	let settings_adapter = Arc::new(SettingsAdapterSqlite::new(&config.db_dir).await?);
	customcss::style::uninstall(&StyleStore::new(settings_adapter)).await?;
	info!("Uninstalled from {}", config.db_dir.display());
	Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
	let builder = AppBuilder::new();

	let res = async move {
		let command = parse_command(std::env::args().nth(1).as_deref())?;
		let config = Config::from_env()?;
		match command {
			Command::Serve => serve(builder, config).await,
			Command::Uninstall => uninstall(&config).await,
		}
	}
	.await;

	match res {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("FATAL: {}", err);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_command() {
		assert!(matches!(parse_command(None), Ok(Command::Serve)));
		assert!(matches!(parse_command(Some("serve")), Ok(Command::Serve)));
		assert!(matches!(parse_command(Some("uninstall")), Ok(Command::Uninstall)));
		assert!(matches!(parse_command(Some("purge")), Err(Error::ConfigError(_))));
	}
}

// vim: ts=4
