// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::interface::ReplicationRole;

/// Initial arena capacity of a scoped execution context, in bytes.
pub const DEFAULT_SCOPE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
	/// Role enabled states are resolved against until changed at runtime.
	pub replication_role: ReplicationRole,
	/// Pass the literal `ANY` marker as the tag argument to handlers
	/// registered for any operation, instead of the concrete tag.
	pub report_wildcard_kind: bool,
	pub scope_capacity: usize,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			replication_role: ReplicationRole::Origin,
			report_wildcard_kind: false,
			scope_capacity: DEFAULT_SCOPE_CAPACITY,
		}
	}
}
