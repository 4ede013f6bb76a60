// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::interface::{ANY_KIND_MARKER, CommandTag, TriggerDef, TriggerRow, TriggerTarget};

use crate::CatalogError;

/// Validates and decodes a row's tag list. An undecodable list or a bad tag
/// is a hard error. A well-formed empty list targets no command.
pub fn decode_tags(row: &TriggerRow) -> cmdtrigger_core::Result<TriggerTarget> {
	let Some(encoded) = &row.tags else {
		return Ok(TriggerTarget::Any);
	};

	let malformed = |reason: String| CatalogError::MalformedTagList {
		name: row.name.clone(),
		reason,
	};

	let raw = encoded.decode_raw().map_err(|err| malformed(err.message.clone()))?;

	let mut tags = Vec::with_capacity(raw.len());
	for tag in raw {
		if tag.is_empty() {
			return Err(malformed("tag list contains an empty tag".to_string()).into());
		}
		if tag == ANY_KIND_MARKER {
			return Err(malformed(format!("tag list contains the reserved `{}` marker", ANY_KIND_MARKER)).into());
		}
		tags.push(CommandTag::parse(tag)?);
	}

	Ok(TriggerTarget::Commands(tags))
}

pub fn decode_row(row: &TriggerRow) -> cmdtrigger_core::Result<TriggerDef> {
	Ok(TriggerDef {
		id: row.id,
		name: row.name.clone(),
		target: decode_tags(row)?,
		phase: row.phase,
		handler: row.handler.clone(),
		enabled: row.enabled,
	})
}
