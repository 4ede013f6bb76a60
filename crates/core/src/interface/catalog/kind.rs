// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::{
	error::diagnostic::command::{empty_command_tag, reserved_command_tag},
	return_error,
};

/// Marker that stands for "every operation kind".
pub const ANY_KIND_MARKER: &str = "ANY";

/// Tag naming one concrete command, e.g. `CREATE TABLE`.
///
/// Never empty and never equal to [`ANY_KIND_MARKER`]. Compared by exact,
/// case-sensitive string equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommandTag(String);

impl CommandTag {
	pub fn parse(tag: impl Into<String>) -> crate::Result<Self> {
		let tag = tag.into();
		if tag.is_empty() {
			return_error!(empty_command_tag());
		}
		if tag == ANY_KIND_MARKER {
			return_error!(reserved_command_tag(&tag));
		}
		Ok(Self(tag))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Deref for CommandTag {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for CommandTag {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl TryFrom<&str> for CommandTag {
	type Error = crate::Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

/// Category of an intercepted operation. `Any` sorts before every command.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OperationKind {
	Any,
	Command(CommandTag),
}

impl OperationKind {
	/// Maps the reserved marker to [`OperationKind::Any`] and everything else
	/// to a command tag.
	pub fn parse(kind: impl Into<String>) -> crate::Result<Self> {
		let kind = kind.into();
		if kind == ANY_KIND_MARKER {
			return Ok(OperationKind::Any);
		}
		Ok(OperationKind::Command(CommandTag::parse(kind)?))
	}

	pub fn is_any(&self) -> bool {
		matches!(self, OperationKind::Any)
	}

	pub fn as_str(&self) -> &str {
		match self {
			OperationKind::Any => ANY_KIND_MARKER,
			OperationKind::Command(tag) => tag.as_str(),
		}
	}
}

impl From<CommandTag> for OperationKind {
	fn from(tag: CommandTag) -> Self {
		OperationKind::Command(tag)
	}
}

impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
