// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, thiserror::Error)]
pub enum SubsystemError {
	#[error("a global tracing subscriber is already installed: {reason}")]
	AlreadyInstalled {
		reason: String,
	},

	#[error("invalid tracing filter `{directive}`: {reason}")]
	InvalidFilter {
		directive: String,
		reason: String,
	},
}

impl IntoDiagnostic for SubsystemError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			SubsystemError::AlreadyInstalled {
				..
			} => Diagnostic {
				code: "SUBSYSTEM_001".to_string(),
				statement: None,
				message,
				label: None,
				help: Some("install the tracing subsystem once per process".to_string()),
				notes: vec![],
				cause: None,
			},
			SubsystemError::InvalidFilter {
				directive,
				..
			} => Diagnostic {
				code: "SUBSYSTEM_002".to_string(),
				statement: Some(directive),
				message,
				label: None,
				help: Some("use `target=level` directives separated by commas, e.g. `cmdtrigger=debug`".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SubsystemError> for Error {
	fn from(err: SubsystemError) -> Self {
		Error(err.into_diagnostic())
	}
}
