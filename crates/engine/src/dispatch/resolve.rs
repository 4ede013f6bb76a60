// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_catalog::{TriggerEntry, cache::CacheState};
use cmdtrigger_core::interface::{OperationKind, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOrigin {
	/// Registered for any operation.
	Wildcard,
	/// Registered for the dispatched operation's kind.
	Specific,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrigger {
	pub entry: TriggerEntry,
	pub origin: TriggerOrigin,
}

impl ResolvedTrigger {
	pub fn name(&self) -> &str {
		&self.entry.name
	}
}

/// Wildcard entries followed by the entries registered for `kind`, each in
/// cache order. Resolving [`OperationKind::Any`] yields the wildcard list once.
pub(crate) fn merge(state: &CacheState, kind: &OperationKind, phase: Phase) -> Vec<ResolvedTrigger> {
	let wildcard = state.get(&OperationKind::Any, phase);
	let specific = if kind.is_any() {
		None
	} else {
		Some(state.get(kind, phase))
	};

	let mut result = Vec::with_capacity(wildcard.len() + specific.as_ref().map_or(0, |s| s.len()));
	result.extend(wildcard.iter().cloned().map(|entry| ResolvedTrigger {
		entry,
		origin: TriggerOrigin::Wildcard,
	}));
	if let Some(specific) = specific {
		result.extend(specific.iter().cloned().map(|entry| ResolvedTrigger {
			entry,
			origin: TriggerOrigin::Specific,
		}));
	}
	result
}
