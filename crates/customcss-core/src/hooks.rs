//! Ordered hook registry
//!
//! Pages and forms expose named points where other components can contribute
//! HTML fragments. Each callback is registered with a priority: lower numbers
//! run first, equal priorities keep registration order. Ordering is always
//! explicit, never a side effect of which crate initialized first.

use std::{future::Future, pin::Pin};

use crate::prelude::*;

pub const DEFAULT_PRIORITY: i32 = 10;

/// Extension points offered by the host pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
	/// Inside `<head>` of every visitor page
	Head,
	/// First element inside the settings form
	FormTop,
	/// Right below the CSS textarea
	TextareaBottom,
	/// Last element inside the settings form
	FormBottom,
}

/// Type-erased async callback producing an HTML fragment
pub type HookFn = Box<
	dyn for<'a> Fn(&'a App) -> Pin<Box<dyn Future<Output = ClResult<String>> + Send + 'a>>
		+ Send
		+ Sync,
>;

struct RegisteredHook {
	point: HookPoint,
	name: Box<str>,
	priority: i32,
	callback: HookFn,
}

#[derive(Default)]
pub struct HookRegistry {
	hooks: Vec<RegisteredHook>,
}

impl HookRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register<F>(&mut self, point: HookPoint, name: impl Into<Box<str>>, priority: i32, f: F)
	where
		F: for<'a> Fn(&'a App) -> Pin<Box<dyn Future<Output = ClResult<String>> + Send + 'a>>
			+ Send
			+ Sync
			+ 'static,
	{
		let name = name.into();
		debug!("Registering hook {:?}/{} at priority {}", point, name, priority);
		self.hooks.push(RegisteredHook { point, name, priority, callback: Box::new(f) });
		// Stable sort: equal priorities stay in registration order
		self.hooks.sort_by_key(|hook| hook.priority);
	}

	/// Hook names of a point in execution order
	pub fn list(&self, point: HookPoint) -> Vec<(&str, i32)> {
		self.hooks
			.iter()
			.filter(|hook| hook.point == point)
			.map(|hook| (hook.name.as_ref(), hook.priority))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.hooks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hooks.is_empty()
	}

	/// Runs every callback of `point` and joins their output with newlines.
	///
	/// A failing callback is logged and left out; the page is still rendered.
	pub async fn render(&self, point: HookPoint, app: &App) -> String {
		let mut fragments = Vec::new();
		for hook in self.hooks.iter().filter(|hook| hook.point == point) {
			match (hook.callback)(app).await {
				Ok(fragment) if fragment.is_empty() => {}
				Ok(fragment) => fragments.push(fragment),
				Err(err) => warn!("Hook {:?}/{} failed: {}", point, hook.name, err),
			}
		}
		fragments.join("\n")
	}
}


// vim: ts=4
