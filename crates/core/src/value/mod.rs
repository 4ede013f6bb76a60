// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Result value produced by a handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
	Undefined,
	Boolean(bool),
	Int8(i64),
	Utf8(String),
}

impl Value {
	/// Only an explicit boolean `false` vetoes an operation.
	pub fn is_veto(&self) -> bool {
		matches!(self, Value::Boolean(false))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Boolean(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(b) => Display::fmt(b, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Utf8(s) => f.write_str(s),
		}
	}
}
