// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Result of firing BEFORE triggers. A cancellation is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeforeOutcome {
	Proceed,
	/// Name of the trigger whose handler returned `false`.
	CancelledBy(String),
}

impl BeforeOutcome {
	pub fn is_cancelled(&self) -> bool {
		matches!(self, BeforeOutcome::CancelledBy(_))
	}

	pub fn cancelled_by(&self) -> Option<&str> {
		match self {
			BeforeOutcome::Proceed => None,
			BeforeOutcome::CancelledBy(name) => Some(name),
		}
	}
}

impl Display for BeforeOutcome {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			BeforeOutcome::Proceed => f.write_str("proceed"),
			BeforeOutcome::CancelledBy(name) => write!(f, "cancelled by {}", name),
		}
	}
}
