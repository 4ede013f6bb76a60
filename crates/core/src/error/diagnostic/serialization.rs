// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn postcard_encode_error(err: postcard::Error) -> Diagnostic {
	Diagnostic {
		code: "SERIALIZATION_001".to_string(),
		statement: None,
		message: format!("failed to encode value: {}", err),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn postcard_decode_error(err: postcard::Error) -> Diagnostic {
	Diagnostic {
		code: "SERIALIZATION_002".to_string(),
		statement: None,
		message: format!("failed to decode value: {}", err),
		label: None,
		help: Some("the stored bytes do not match the expected layout".to_string()),
		notes: vec![],
		cause: None,
	}
}
