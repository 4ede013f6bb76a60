// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Calling convention a handler was registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerShape {
	/// when, tag, object id, schema, object name
	Plain,
	/// the plain arguments followed by the opaque operation descriptor
	Extended,
}

impl HandlerShape {
	pub fn arity(&self) -> usize {
		match self {
			HandlerShape::Plain => 5,
			HandlerShape::Extended => 6,
		}
	}
}

/// Reference to executable handler logic, resolved once at registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandlerRef {
	pub name: String,
	pub shape: HandlerShape,
}

impl HandlerRef {
	pub fn plain(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			shape: HandlerShape::Plain,
		}
	}

	pub fn extended(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			shape: HandlerShape::Extended,
		}
	}

	pub fn arity(&self) -> usize {
		self.shape.arity()
	}
}

impl Display for HandlerRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.name, self.arity())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerReturn {
	Void,
	Boolean,
	Other(String),
}

impl HandlerReturn {
	/// Trigger handlers return nothing or a boolean verdict.
	pub fn is_trigger_compatible(&self) -> bool {
		matches!(self, HandlerReturn::Void | HandlerReturn::Boolean)
	}
}

impl Display for HandlerReturn {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			HandlerReturn::Void => f.write_str("void"),
			HandlerReturn::Boolean => f.write_str("boolean"),
			HandlerReturn::Other(name) => f.write_str(name),
		}
	}
}

/// What a handler catalog knows about one handler overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSignature {
	pub name: String,
	pub shape: HandlerShape,
	pub returns: HandlerReturn,
}

impl HandlerSignature {
	pub fn handler_ref(&self) -> HandlerRef {
		HandlerRef {
			name: self.name.clone(),
			shape: self.shape,
		}
	}
}
