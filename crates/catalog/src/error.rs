// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::{
	Diagnostic, Error, IntoDiagnostic,
	interface::{HandlerReturn, Phase},
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("trigger `{name}` already exists")]
	TriggerAlreadyExists {
		name: String,
		kind: String,
	},

	#[error("trigger `{name}` does not exist")]
	TriggerNotFound {
		name: String,
		kind: Option<String>,
	},

	#[error("trigger name `{name}` is ambiguous")]
	AmbiguousTriggerName {
		name: String,
		candidates: Vec<String>,
	},

	#[error("cannot add {requested} trigger `{name}` to `{kind}`")]
	PhaseClassConflict {
		name: String,
		kind: String,
		requested: Phase,
		existing: String,
		existing_phase: Phase,
	},

	#[error("AFTER triggers are not supported for `{tag}`")]
	AfterTriggerNotSupported {
		tag: String,
	},

	#[error("handler `{handler}` does not exist")]
	HandlerNotFound {
		handler: String,
	},

	#[error("handler `{handler}` must return void or boolean")]
	InvalidHandlerReturn {
		handler: String,
		returns: HandlerReturn,
	},

	#[error("trigger `{name}` has a malformed tag list")]
	MalformedTagList {
		name: String,
		reason: String,
	},

	#[error("trigger name must not be empty")]
	EmptyTriggerName,

	#[error("trigger `{name}` has an empty tag list")]
	EmptyTagList {
		name: String,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CatalogError::TriggerAlreadyExists {
				name,
				kind,
			} => Diagnostic {
				code: "TRIGGER_001".to_string(),
				statement: None,
				message: format!("trigger `{}` already exists", name),
				label: Some(format!("name is already used by a trigger on `{}`", kind)),
				help: Some("choose a different name or drop the existing trigger first".to_string()),
				notes: vec!["triggers on every command share their name scope with all other triggers"
					.to_string()],
				cause: None,
			},

			CatalogError::TriggerNotFound {
				name,
				kind,
			} => Diagnostic {
				code: "TRIGGER_002".to_string(),
				statement: None,
				message: match kind {
					Some(kind) => format!("trigger `{}` on `{}` does not exist", name, kind),
					None => format!("trigger `{}` does not exist", name),
				},
				label: None,
				help: Some("use IF EXISTS to ignore a missing trigger".to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::AmbiguousTriggerName {
				name,
				candidates,
			} => Diagnostic {
				code: "TRIGGER_003".to_string(),
				statement: None,
				message: format!("trigger name `{}` is ambiguous", name),
				label: Some(format!("{} triggers share this name", candidates.len())),
				help: Some("qualify the trigger with the command it is attached to".to_string()),
				notes: candidates.into_iter().map(|c| format!("candidate: {}", c)).collect(),
				cause: None,
			},

			CatalogError::PhaseClassConflict {
				name,
				kind,
				requested,
				existing,
				existing_phase,
			} => Diagnostic {
				code: "TRIGGER_004".to_string(),
				statement: None,
				message: format!("cannot add {} trigger `{}` to `{}`", requested, name, kind),
				label: Some(format!("`{}` already has {} trigger `{}`", kind, existing_phase, existing)),
				help: Some(format!(
					"a command may have {} triggers or {} triggers, never both",
					requested.class(),
					existing_phase.class()
				)),
				notes: vec![],
				cause: None,
			},

			CatalogError::AfterTriggerNotSupported {
				tag,
			} => Diagnostic {
				code: "TRIGGER_005".to_string(),
				statement: None,
				message: format!("AFTER triggers are not supported for `{}`", tag),
				label: None,
				help: Some("use a BEFORE trigger instead".to_string()),
				notes: vec![format!("`{}` cannot run inside the context that fires AFTER triggers", tag)],
				cause: None,
			},

			CatalogError::HandlerNotFound {
				handler,
			} => Diagnostic {
				code: "TRIGGER_006".to_string(),
				statement: None,
				message: format!("handler `{}` does not exist", handler),
				label: None,
				help: Some("a handler accepts five arguments, or six when it also takes the operation descriptor"
					.to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::InvalidHandlerReturn {
				handler,
				returns,
			} => Diagnostic {
				code: "TRIGGER_007".to_string(),
				statement: None,
				message: format!("handler `{}` must return void or boolean", handler),
				label: Some(format!("returns {}", returns)),
				help: None,
				notes: vec![],
				cause: None,
			},

			CatalogError::MalformedTagList {
				name,
				reason,
			} => Diagnostic {
				code: "TRIGGER_008".to_string(),
				statement: None,
				message: format!("trigger `{}` has a malformed tag list: {}", name, reason),
				label: Some("registry data is corrupt".to_string()),
				help: Some("drop and recreate the trigger".to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::EmptyTriggerName => Diagnostic {
				code: "TRIGGER_009".to_string(),
				statement: None,
				message: "trigger name must not be empty".to_string(),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},

			CatalogError::EmptyTagList {
				name,
			} => Diagnostic {
				code: "TRIGGER_010".to_string(),
				statement: None,
				message: format!("trigger `{}` has an empty tag list", name),
				label: None,
				help: Some("list at least one command tag, or omit the list to fire on every command"
					.to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(err.into_diagnostic())
	}
}
