// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use cmdtrigger_core::interface::{OperationKind, TriggerDef, TriggerTarget};

/// Addresses a trigger by name, optionally qualified by the command it is
/// attached to. `OperationKind::Any` selects triggers on every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerIdent {
	pub name: String,
	pub kind: Option<OperationKind>,
}

impl TriggerIdent {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: None,
		}
	}

	pub fn on(name: impl Into<String>, kind: OperationKind) -> Self {
		Self {
			name: name.into(),
			kind: Some(kind),
		}
	}

	pub(crate) fn matches(&self, def: &TriggerDef) -> bool {
		if def.name != self.name {
			return false;
		}
		match (&self.kind, &def.target) {
			(None, _) => true,
			(Some(OperationKind::Any), TriggerTarget::Any) => true,
			(Some(OperationKind::Command(tag)), target) => target.contains(tag),
			(Some(OperationKind::Any), TriggerTarget::Commands(_)) => false,
		}
	}
}

impl Display for TriggerIdent {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.kind {
			Some(kind) => write!(f, "{} ON {}", self.name, kind),
			None => f.write_str(&self.name),
		}
	}
}

impl From<&str> for TriggerIdent {
	fn from(name: &str) -> Self {
		TriggerIdent::new(name)
	}
}
