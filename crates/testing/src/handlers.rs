// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use cmdtrigger_core::interface::{HandlerCatalog, HandlerReturn, HandlerShape, HandlerSignature};
use parking_lot::RwLock;

/// Handler catalog with a fixed set of overloads.
///
/// A permissive catalog also answers for any name it does not know, as a
/// plain handler returning a boolean.
#[derive(Default)]
pub struct StaticHandlerCatalog {
	handlers: RwLock<HashMap<(String, HandlerShape), HandlerReturn>>,
	permissive: bool,
}

impl StaticHandlerCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn permissive() -> Self {
		Self {
			handlers: RwLock::new(HashMap::new()),
			permissive: true,
		}
	}

	pub fn plain(self, name: &str) -> Self {
		self.returning(name, HandlerShape::Plain, HandlerReturn::Boolean)
	}

	pub fn extended(self, name: &str) -> Self {
		self.returning(name, HandlerShape::Extended, HandlerReturn::Boolean)
	}

	pub fn returning(self, name: &str, shape: HandlerShape, returns: HandlerReturn) -> Self {
		self.define(name, shape, returns);
		self
	}

	pub fn define(&self, name: &str, shape: HandlerShape, returns: HandlerReturn) {
		self.handlers.write().insert((name.to_string(), shape), returns);
	}

	fn knows(&self, name: &str) -> bool {
		self.handlers.read().keys().any(|(known, _)| known == name)
	}
}

impl HandlerCatalog for StaticHandlerCatalog {
	fn find_handler(&self, name: &str, shape: HandlerShape) -> Option<HandlerSignature> {
		if let Some(returns) = self.handlers.read().get(&(name.to_string(), shape)) {
			return Some(HandlerSignature {
				name: name.to_string(),
				shape,
				returns: returns.clone(),
			});
		}

		if self.permissive && shape == HandlerShape::Plain && !self.knows(name) {
			return Some(HandlerSignature {
				name: name.to_string(),
				shape,
				returns: HandlerReturn::Boolean,
			});
		}
		None
	}
}
