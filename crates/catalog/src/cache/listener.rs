// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::event::{EventListener, catalog::TriggerChangedEvent};
use tracing::trace;

use crate::TriggerCache;

/// Drops the cache whenever the trigger registry commits a change.
pub struct CacheInvalidationListener {
	cache: TriggerCache,
}

impl CacheInvalidationListener {
	pub fn new(cache: TriggerCache) -> Self {
		Self {
			cache,
		}
	}
}

impl EventListener<TriggerChangedEvent> for CacheInvalidationListener {
	fn on(&self, event: &TriggerChangedEvent) {
		trace!(trigger = %event.name, version = %event.version, change = ?event.change, "trigger registry changed");
		self.cache.invalidate();
	}
}
