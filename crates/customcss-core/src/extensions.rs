//! Type-keyed map of feature state
//!
//! Feature crates park their long-lived services here (the style store, the
//! editor templates) so `AppState` does not need to know their types.

use std::any::{Any, TypeId};
use std::collections::HashMap;

struct Entry {
	type_name: &'static str,
	value: Box<dyn Any + Send + Sync>,
}

#[derive(Default)]
pub struct Extensions {
	map: HashMap<TypeId, Entry>,
}

impl Extensions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `val`, replacing any earlier value of the same type
	pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) {
		self.map.insert(
			TypeId::of::<T>(),
			Entry { type_name: std::any::type_name::<T>(), value: Box::new(val) },
		);
	}

	pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
		self.map.get(&TypeId::of::<T>())?.value.downcast_ref::<T>()
	}

	pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
		self.map.contains_key(&TypeId::of::<T>())
	}
}

impl std::fmt::Debug for Extensions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.map.values().map(|e| e.type_name)).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq)]
	struct Marker(u32);

	#[test]
	fn test_insert_get_replace() {
		let mut ext = Extensions::new();
		assert!(ext.get::<Marker>().is_none());

		ext.insert(Marker(1));
		ext.insert(Marker(2));
		assert_eq!(ext.get::<Marker>(), Some(&Marker(2)));
		assert!(ext.contains::<Marker>());
		assert!(!ext.contains::<String>());
	}
}

// vim: ts=4
