// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Firing point of a trigger relative to the operation's own execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
	Before,
	After,
	InsteadOf,
}

/// Phases that may not be mixed on the same operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseClass {
	/// BEFORE and AFTER
	Surrounding,
	/// INSTEAD OF
	Replacing,
}

impl Phase {
	pub const ALL: [Phase; 3] = [Phase::Before, Phase::After, Phase::InsteadOf];

	pub fn as_str(&self) -> &'static str {
		match self {
			Phase::Before => "BEFORE",
			Phase::After => "AFTER",
			Phase::InsteadOf => "INSTEAD OF",
		}
	}

	pub fn class(&self) -> PhaseClass {
		match self {
			Phase::Before | Phase::After => PhaseClass::Surrounding,
			Phase::InsteadOf => PhaseClass::Replacing,
		}
	}
}

impl Display for Phase {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Display for PhaseClass {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PhaseClass::Surrounding => f.write_str("BEFORE/AFTER"),
			PhaseClass::Replacing => f.write_str("INSTEAD OF"),
		}
	}
}
