// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn empty_command_tag() -> Diagnostic {
	Diagnostic {
		code: "COMMAND_001".to_string(),
		statement: None,
		message: "command tag must not be empty".to_string(),
		label: None,
		help: Some("use the tag reported for the command, for example `CREATE TABLE`".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn reserved_command_tag(tag: &str) -> Diagnostic {
	Diagnostic {
		code: "COMMAND_002".to_string(),
		statement: None,
		message: format!("`{}` is reserved and cannot be used as a command tag", tag),
		label: None,
		help: Some("omit the tag list to register a trigger for every command".to_string()),
		notes: vec![],
		cause: None,
	}
}
