// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// An invariant the engine relies on did not hold.
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		statement: None,
		message: format!("internal error: {}", reason.into()),
		label: None,
		help: Some("this failure should not occur in normal operation".to_string()),
		notes: vec![],
		cause: None,
	}
}
