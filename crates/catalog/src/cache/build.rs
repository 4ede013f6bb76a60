// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use cmdtrigger_core::{
	CommitVersion,
	interface::{RegistryAccessor, ReplicationRole},
};
use tracing::{debug, instrument};

use crate::{
	cache::{CacheKey, CacheState, TriggerEntry},
	store::decode_tags,
};

/// Builds a complete cache from every row visible at `version`. Rows that do
/// not fire under `role` are skipped before their tag list is inspected; any
/// other malformed row fails the whole build. A row with an empty tag list
/// contributes no key.
#[instrument(name = "trigger::cache::build", level = "debug", skip(registry))]
pub(crate) fn build(
	registry: &dyn RegistryAccessor,
	version: CommitVersion,
	role: ReplicationRole,
	epoch: u64,
) -> cmdtrigger_core::Result<CacheState> {
	let rows = registry.scan_all(version)?;
	let scanned = rows.len();

	let mut lists: HashMap<CacheKey, Vec<TriggerEntry>> = HashMap::new();
	for row in rows {
		if !row.enabled.fires_under(role) {
			continue;
		}

		let target = decode_tags(&row)?;
		let entry = TriggerEntry {
			id: row.id,
			name: row.name,
			handler: row.handler,
		};

		for kind in target.kinds() {
			lists.entry(CacheKey {
				kind,
				phase: row.phase,
			})
			.or_default()
			.push(entry.clone());
		}
	}

	// name order is the contract, whatever order the registry scanned in
	let entries: HashMap<CacheKey, Arc<[TriggerEntry]>> = lists
		.into_iter()
		.map(|(key, mut list)| {
			list.sort_by(|l, r| l.name.cmp(&r.name).then(l.id.cmp(&r.id)));
			(key, Arc::from(list))
		})
		.collect();

	debug!(scanned, keys = entries.len(), "trigger cache built");

	Ok(CacheState {
		epoch,
		version,
		role,
		entries,
	})
}
