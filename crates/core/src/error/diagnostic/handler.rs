// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// A trigger handler raised a failure while running.
pub fn handler_failed(handler: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "HANDLER_001".to_string(),
		statement: None,
		message: format!("trigger handler `{}` failed: {}", handler, reason.into()),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// No executable logic is bound to the handler reference.
pub fn handler_not_bound(handler: &str) -> Diagnostic {
	Diagnostic {
		code: "HANDLER_002".to_string(),
		statement: None,
		message: format!("trigger handler `{}` is not bound to any implementation", handler),
		label: None,
		help: Some("register the handler with the invoker before firing triggers that reference it".to_string()),
		notes: vec![],
		cause: None,
	}
}
